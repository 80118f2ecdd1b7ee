pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Shared interface the test battery and benchmarks drive every sort
/// strategy through.
///
/// The `Clone` bound admits out-of-place implementations that sort into a
/// fresh buffer and move the result back.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}
