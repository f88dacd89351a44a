use inner::doc_reexport;

doc_reexport! {
    longest_unique_run,
    word_pattern,
}
