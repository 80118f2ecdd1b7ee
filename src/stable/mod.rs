pub mod rust_std;

// The baseline every other strategy is timed against. Quadratic, keep it
// away from large inputs.
pub mod rust_bubble_sort;
