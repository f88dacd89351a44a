#[macro_export]
macro_rules! doc_reexport {
    ( $($member:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $member::{self, *};
    )* };
}
