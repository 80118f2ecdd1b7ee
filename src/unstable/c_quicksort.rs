//! Calls the recursive C quicksort compiled from `c/quicksort.c`.
//!
//! `i32` keys only, the C side has no comparator hook.

pub fn sort(data: &mut [i32]) {
    unsafe {
        // SAFETY: the C side sorts `len` contiguous i32 values in place and
        // neither retains the pointer nor unwinds.
        ffi::quicksort_i32(data.as_mut_ptr(), data.len());
    }
}

mod ffi {
    extern "C" {
        pub fn quicksort_i32(data: *mut i32, len: usize);
    }
}
