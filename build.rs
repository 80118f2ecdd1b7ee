fn main() {
    println!("cargo:rerun-if-changed=c/quicksort.c");

    if std::env::var_os("CARGO_FEATURE_C_QUICKSORT").is_some() {
        cc::Build::new().file("c/quicksort.c").compile("c_quicksort");
    }
}
