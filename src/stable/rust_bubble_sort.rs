use std::cmp::Ordering;

sort_impl!("rust_bubble_stable");

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    let len = data.len();

    for pass in 0..len {
        // The largest unsorted element bubbles to the end of each pass, so
        // the scan shrinks by one slot per pass.
        for i in 0..len - (pass + 1) {
            if compare(&data[i], &data[i + 1]) == Ordering::Greater {
                data.swap(i, i + 1);
            }
        }
    }
}
