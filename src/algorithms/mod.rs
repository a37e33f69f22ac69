//! Sorting and searching over record sequences
//!
//! Small-volume algorithms: bubble sort, sequential search, binary search.

pub mod search;
pub mod sort;

pub use search::{binary_search, sequential_search};
pub use sort::{bubble_sort, bubble_sort_counted};
