//! Stable, adaptive TimSort over an index-addressable doubly linked list.
//!
//! [`IndexableList`] is the container, [`TimSort`] the engine that sorts one list in place. The
//! `stable` module exposes slice entry points with the shared [`list_test_tools::Sort`] interface
//! so the engine can be run against the common test-suite and benchmarks.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl list_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }
        }
    };
}

pub mod config;
pub mod error;
pub mod list;
pub mod run;
pub mod stable;
pub mod timsort;

pub use config::TimSortConfig;
pub use error::{CapacityExceededError, ListError, SortError};
pub use list::{IndexableList, NodeKey};
pub use run::{Run, RunStack};
pub use timsort::{MergeMode, TimSort};
