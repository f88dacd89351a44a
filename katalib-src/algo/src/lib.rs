use inner::doc_reexport;

doc_reexport! {
    eating_speed,
    list_intersect,
}
