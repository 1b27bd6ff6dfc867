//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RUN_HANDLER!` - Creates a rule handler that emits the whole regex match
//!
//! These macros reduce boilerplate in the rule tables.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a rule handler for patterns whose regex match is the token.
///
/// The generated handler emits the match at the cursor as a single token of
/// the given kind and advances past it.
///
/// # Example
///
/// ```ignore
/// Rule::new(r"^\s+", MK_RUN_HANDLER!(TokenKind::Text))
/// ```
#[macro_export]
macro_rules! MK_RUN_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            let len = regex.find(lexer.remainder()).map_or(0, |found| found.end());
            lexer.emit($kind, len);
        }
    };
}
