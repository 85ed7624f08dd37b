//! Shared test-suite and input patterns for sorts exposed through [`Sort`].

pub mod patterns;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;
}

/// Generates one `#[test]` per shared test body for the given [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @tests $sort_impl,
            [
                basic,
                fixed_seed,
                random,
                random_uniform,
                random_zipf,
                random_sorted,
                random_string,
                all_equal,
                ascending,
                descending,
                saw_mixed,
                pipe_organ,
                stability,
                stability_descending_runs,
                idempotent,
            ]
        );
    };
    (@tests $sort_impl:ty, [$($test_name:ident),* $(,)?]) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<sort_ $test_name>]() {
                    $crate::tests::$test_name::<$sort_impl>();
                }
            }
        )*
    };
}
