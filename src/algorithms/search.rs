//! Sequential and binary search

/// First element matching `predicate`, scanning front to back
pub fn sequential_search<'a, T, P>(items: &'a [T], mut predicate: P) -> Option<&'a T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

/// Binary search for the first element whose key equals `target`.
///
/// `sorted` must already be ordered by `key`; this is not checked and an
/// unsorted input gives an unspecified answer.
pub fn binary_search<'a, T, K, F>(sorted: &'a [T], target: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if key(&sorted[mid]) < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    sorted.get(lo).filter(|item| key(item) == *target)
}
