//! Bubble sort by key

/// Sorted copy of `items`, ordered by `key`. The input is not modified.
///
/// Equal keys are never swapped, so the sort is stable.
pub fn bubble_sort<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    bubble_sort_counted(items, key).0
}

/// Same as [`bubble_sort`], also returning the number of swaps performed.
///
/// A pass without swaps ends the sort early, so already sorted input costs a
/// single pass and zero swaps.
pub fn bubble_sort_counted<T, K, F>(items: &[T], key: F) -> (Vec<T>, usize)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();
    let n = sorted.len();
    let mut swaps = 0;

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if key(&sorted[j]) > key(&sorted[j + 1]) {
                sorted.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }

    (sorted, swaps)
}
