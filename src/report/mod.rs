//! Report module - summarizing batch conversion results

pub mod summary;

pub use summary::*;
