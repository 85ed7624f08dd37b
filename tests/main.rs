use list_test_tools::instantiate_sort_tests;

type TestSort = list_timsort_rs::stable::rust_list_timsort::SortImpl;

instantiate_sort_tests!(TestSort);
