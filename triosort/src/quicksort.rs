use crate::heapsort::heapsort;
use crate::pivot::choose_pivot;

/// Sorts the elements of `v` into `out`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to
/// `heapsort`. If zero, this function will immediately switch to heapsort.
pub(crate) fn quicksort<T, F>(mut v: Vec<T>, out: &mut Vec<T>, mut limit: u32, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= 1 {
            out.append(&mut v);
            return;
        }

        // If too many bad pivot choices were made, finish the remaining run
        // with heapsort in order to guarantee `O(N x log(N))` worst-case.
        if limit == 0 {
            heapsort(&mut v, is_less);
            out.append(&mut v);
            return;
        }

        limit -= 1;

        let pivot = v[choose_pivot(&v, is_less)].clone();

        // Split into elements below, tied with and above the pivot. Ties get
        // their own run, every duplicate of the pivot value survives into
        // the output.
        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();

        for elem in v {
            if is_less(&elem, &pivot) {
                less.push(elem);
            } else if is_less(&pivot, &elem) {
                greater.push(elem);
            } else {
                equal.push(elem);
            }
        }

        // Recurse into the elements below the pivot. The recursion depth is
        // capped by `limit`, which only ever shrinks on the way down.
        quicksort(less, out, limit, is_less);

        out.append(&mut equal);

        // Continue with the elements above the pivot.
        v = greater;
    }
}
