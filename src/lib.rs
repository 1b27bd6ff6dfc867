#![allow(clippy::module_inception)]

use tracing::debug;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::languages::{Language, LanguageScanner};
pub use lexer::tokens::{Token, TokenKind, TokenStream};

/// Tokenizes `code` for the language named by `language`.
///
/// The tag is matched case-insensitively against the alias table; unknown
/// tags produce a single `text` token. Never fails, and the returned values
/// always concatenate back to `code`.
pub fn highlight(code: &str, language: &str) -> TokenStream {
    resolve(language).scanner().scan(code)
}

/// Splits `code` on `\n` and tokenizes every line on its own.
///
/// Constructs never continue across lines here, so an unclosed block
/// comment only runs to the end of its line. Newlines belong to no line.
pub fn highlight_lines(code: &str, language: &str) -> Vec<TokenStream> {
    let scanner = resolve(language).scanner();
    code.split('\n').map(|line| scanner.scan(line)).collect()
}

fn resolve(language: &str) -> Language {
    let resolved = Language::from_alias(language);
    if resolved == Language::PlainText {
        debug!(language, "no scanner for language, emitting plain text");
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_dispatches_by_alias() {
        assert_eq!(highlight("return", "js").tokens()[0].kind, TokenKind::Keyword);
        assert_eq!(highlight("return", "py").tokens()[0].kind, TokenKind::Keyword);
        assert_eq!(highlight("return", "html").tokens()[0].kind, TokenKind::Text);
    }

    #[test]
    fn test_highlight_lines_keeps_line_count() {
        let lines = highlight_lines("/* open\nstill */ x\n", "ts");

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_source(), "/* open");
        assert_eq!(lines[0].tokens()[0].kind, TokenKind::Comment);
        assert_eq!(lines[1].to_source(), "still */ x");
        assert_eq!(lines[1].tokens()[0].kind, TokenKind::Text);
        assert!(lines[2].is_empty());
    }
}
