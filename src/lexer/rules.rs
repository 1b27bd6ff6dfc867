//! Rule tables for each scanning family.
//!
//! Order inside a table is significant: comments and strings come first so
//! that quotes inside comments (and comment markers inside strings) never
//! start a new token.

use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_RUN_HANDLER;

use super::{
    lexer::{Lexer, Rule},
    tokens::TokenKind,
};

lazy_static! {
    pub static ref C_LIKE_RULES: Vec<Rule> = vec![
        Rule::new(r"^//", line_comment_handler),
        Rule::new(r"^/\*", block_comment_handler),
        Rule::new(r#"^["'`]"#, string_handler),
        Rule::new(r"^[0-9][0-9.xXoObBeE]*", MK_RUN_HANDLER!(TokenKind::Number)),
        Rule::new(r"^[A-Za-z_$][A-Za-z0-9_$]*", identifier_handler),
        Rule::new(r"^[+\-*/%=<>!&|^~?:]+", MK_RUN_HANDLER!(TokenKind::Operator)),
        Rule::new(r"^[{}()\[\];,.]", MK_RUN_HANDLER!(TokenKind::Punctuation)),
        Rule::new(r"^\s+", MK_RUN_HANDLER!(TokenKind::Text)),
    ];

    pub static ref PYTHON_RULES: Vec<Rule> = vec![
        Rule::new(r"^#", line_comment_handler),
        // Triple quotes before single quotes
        Rule::new(r#"^("""|'''|"|')"#, string_handler),
        Rule::new(r"^[0-9][0-9.xXoObBeEjJ]*", MK_RUN_HANDLER!(TokenKind::Number)),
        Rule::new(r"^[A-Za-z_$][A-Za-z0-9_$]*", identifier_handler),
        Rule::new(r"^[+\-*/%=<>!&|^~?]+", MK_RUN_HANDLER!(TokenKind::Operator)),
        Rule::new(r"^[{}()\[\]:;,.]", MK_RUN_HANDLER!(TokenKind::Punctuation)),
        Rule::new(r"^\s+", MK_RUN_HANDLER!(TokenKind::Text)),
    ];

    pub static ref MARKUP_RULES: Vec<Rule> = vec![
        Rule::new(r"^<!--", markup_comment_handler),
        Rule::new(r"^<", tag_handler),
        // Only reachable when a quote opens a text run, e.g. right after a tag
        Rule::new(r#"^["']"#, string_handler),
        Rule::new(r"^[^<]+", MK_RUN_HANDLER!(TokenKind::Text)),
    ];
}

/// Comment running to the end of the line; the newline is left for the
/// whitespace rule.
fn line_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    let remainder = lexer.remainder();
    let len = remainder.find('\n').unwrap_or(remainder.len());
    lexer.emit(TokenKind::Comment, len);
}

fn block_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.emit_until(TokenKind::Comment, "*/", 2);
}

fn markup_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.emit_until(TokenKind::Comment, "-->", 4);
}

/// Everything from `<` through the next `>`, attributes included.
fn tag_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.emit_until(TokenKind::Tag, ">", 1);
}

/// Quoted literal closed by the same delimiter the regex matched.
///
/// A closing delimiter directly after a backslash counts as escaped. The
/// check looks at one character only, so `"a\\"` stays open.
fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let remainder = lexer.remainder();
    let Some(opener) = regex.find(remainder) else {
        return;
    };
    let delimiter = opener.as_str();
    let bytes = remainder.as_bytes();

    let mut search = delimiter.len();
    let len = loop {
        match remainder[search..].find(delimiter) {
            Some(offset) => {
                let close = search + offset;
                if bytes[close - 1] == b'\\' {
                    search = close + 1;
                } else {
                    break close + delimiter.len();
                }
            }
            None => break remainder.len(),
        }
    };

    lexer.emit(TokenKind::String, len);
}

/// Identifier classified as keyword, function call, or plain text.
fn identifier_handler(lexer: &mut Lexer, regex: &Regex) {
    let remainder = lexer.remainder();
    let Some(word) = regex.find(remainder) else {
        return;
    };

    let kind = if lexer.is_keyword(word.as_str()) {
        TokenKind::Keyword
    } else if remainder[word.end()..].starts_with('(') {
        TokenKind::Function
    } else {
        TokenKind::Text
    };

    lexer.emit(kind, word.end());
}
