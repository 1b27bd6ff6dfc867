use std::collections::HashSet;

use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, TokenStream};

pub type RuleHandler = fn(&mut Lexer, &Regex);

/// One entry of a scanner's rule table.
///
/// `regex` must be anchored with `^`; it decides whether the rule applies at
/// the cursor, and `handler` consumes the input and pushes the token.
pub struct Rule {
    regex: Regex,
    handler: RuleHandler,
}

impl Rule {
    pub fn new(pattern: &str, handler: RuleHandler) -> Rule {
        Rule {
            regex: Regex::new(pattern).expect("rule patterns are static and valid"),
            handler,
        }
    }

    pub fn matches(&self, remainder: &str) -> bool {
        self.regex.is_match(remainder)
    }
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    keywords: &'static HashSet<&'static str>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, keywords: &'static HashSet<&'static str>) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            keywords,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Pushes the next `len` bytes as one token and advances past them.
    ///
    /// `len` is clamped to the end of input; zero emits nothing.
    pub fn emit(&mut self, kind: TokenKind, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        if end == self.pos {
            return;
        }

        self.tokens
            .push(MK_TOKEN!(kind, self.source[self.pos..end].to_string()));
        self.pos = end;
    }

    /// Pushes the character under the cursor as its own token.
    pub fn emit_char(&mut self, kind: TokenKind) {
        let len = self.remainder().chars().next().map_or(0, char::len_utf8);
        self.emit(kind, len);
    }

    /// Emits everything from the cursor through the first `terminator`
    /// found at or after `skip` bytes, or through end of input.
    pub fn emit_until(&mut self, kind: TokenKind, terminator: &str, skip: usize) {
        let remainder = self.remainder();
        let skip = skip.min(remainder.len());
        let len = match remainder[skip..].find(terminator) {
            Some(offset) => skip + offset + terminator.len(),
            None => remainder.len(),
        };

        self.emit(kind, len);
    }
}

/// Runs a rule table over `source`.
///
/// Rules are tried in order at every cursor position and the first match
/// wins. Input no rule claims is emitted one character at a time as text,
/// so every byte ends up in exactly one token.
pub fn tokenize(
    source: &str,
    rules: &[Rule],
    keywords: &'static HashSet<&'static str>,
) -> TokenStream {
    let mut lex = Lexer::new(source, keywords);

    while !lex.at_eof() {
        let start = lex.pos();
        let remainder = lex.remainder();

        match rules.iter().find(|rule| rule.matches(remainder)) {
            Some(rule) => (rule.handler)(&mut lex, &rule.regex),
            None => lex.emit_char(TokenKind::Text),
        }

        // A handler that consumed nothing would spin forever
        if lex.pos() == start {
            lex.emit_char(TokenKind::Text);
        }
    }

    trace!(bytes = source.len(), tokens = lex.tokens.len(), "scanned source");
    TokenStream::from(lex.tokens)
}
