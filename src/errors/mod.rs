//! Error types for the fallible edges of the crate.
//!
//! Highlighting itself never fails. Errors only come from strict language
//! lookup and from the command-line front end (reading input, writing JSON).

pub mod errors;
