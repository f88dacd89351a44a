use inner::doc_reexport;

doc_reexport! {
    interval_scheduling,
    missing_numbers,
}
