//! A small testbed that times a handful of sort strategies against each
//! other: the reference bubble sort, an allocating three-way partition
//! quicksort (the `triosort` crate), both standard library sorts and a
//! recursive C quicksort called via FFI.
//!
//! Each strategy lives in its own module exposing `sort`/`sort_by` free
//! functions plus a `SortImpl` shim for the shared test battery and the
//! benchmark harness.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;
