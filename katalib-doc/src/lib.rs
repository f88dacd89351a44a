//! Worked solutions to classic algorithm problems, one crate per problem,
//! grouped loosely by domain:
//!
//! - [`algo`] – answer-space search and pointer algorithms
//! - [`ds`] – supporting data structures
//! - [`seq`] – single-pass and greedy sequence scans
//! - [`string`] – text scanning and matching

use inner::doc_reexport;

doc_reexport! {
    algo,
    ds,
    seq,
    string,
}
