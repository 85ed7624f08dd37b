use crate::list::IndexableList;
use crate::timsort::TimSort;

sort_impl!("rust_list_timsort_stable");

/// Sorts the slice by moving it through an [`IndexableList`].
///
/// This sort is stable (i.e., does not reorder equal elements). Every element access walks the
/// list, so this is a correctness and research vehicle rather than a fast slice sort.
///
/// Slices longer than [`DEFAULT_MAX_SIZE`](crate::config::DEFAULT_MAX_SIZE) are refused by the
/// engine and left as they are.
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let mut list: IndexableList<T> = v.iter().cloned().collect();
    if TimSort::new(&mut list).sort().is_err() {
        return;
    }

    for (dst, src) in v.iter_mut().zip(list) {
        *dst = src;
    }
}
