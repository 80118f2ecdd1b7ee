use std::cmp::Ordering;

sort_impl!("rust_triosort_unstable");

pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    let sorted = triosort::sort(data);
    write_back(data, sorted);
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    let sorted = triosort::sort_by(data, compare);
    write_back(data, sorted);
}

// The underlying sort is out-of-place, move its result into the borrowed
// slice to satisfy the in-place interface.
fn write_back<T>(data: &mut [T], sorted: Vec<T>) {
    debug_assert_eq!(data.len(), sorted.len());

    for (slot, value) in data.iter_mut().zip(sorted) {
        *slot = value;
    }
}
