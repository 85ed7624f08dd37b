// TimSort over a linked list, with run-length triggered galloping merges.
pub mod rust_list_timsort;
