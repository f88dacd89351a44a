use inner::doc_reexport;

doc_reexport! {
    slist,
}
