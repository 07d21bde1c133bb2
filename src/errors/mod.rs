//! Error types for the lexer.
//!
//! - `ErrorImpl`, the kind of failure and its message
//! - `Error`, the kind together with the source position it occurred at
//! - `ErrorTip`, an optional suggestion shown alongside rendered errors

pub mod errors;
