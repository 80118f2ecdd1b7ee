pub mod rust_std;

// The partition sort built in this repo, see the `triosort` crate.
pub mod rust_triosort;

// Call the recursive C quicksort via FFI.
#[cfg(feature = "c_quicksort")]
pub mod c_quicksort;
