//! Lexical analysis for syntax highlighting.
//!
//! This module turns code samples into classified token streams. It handles:
//!
//! - Resolving a language tag to a scanner family
//! - Ordered regex rule tables per family (C-like, Python, markup)
//! - Keyword, function-call and literal classification
//! - Lossless coverage: unterminated constructs run to end of input

pub mod languages;
pub mod lexer;
pub mod rules;
pub mod tokens;
