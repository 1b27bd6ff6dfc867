use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref JS_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "abstract", "as", "async", "await", "break", "case", "catch", "class", "const",
            "continue", "debugger", "declare", "default", "delete", "do", "else", "enum",
            "export", "extends", "false", "finally", "for", "from", "function", "get", "if",
            "implements", "import", "in", "instanceof", "interface", "keyof", "let", "namespace",
            "new", "null", "of", "private", "protected", "public", "readonly", "return", "set",
            "static", "super", "switch", "this", "throw", "true", "try", "type", "typeof",
            "undefined", "var", "void", "while", "with", "yield",
        ] {
            set.insert(keyword);
        }
        set
    };

    pub static ref PYTHON_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ] {
            set.insert(keyword);
        }
        set
    };

    // Markup and plain text have no reserved words
    pub static ref NO_KEYWORDS: HashSet<&'static str> = HashSet::new();
}

/// Category a renderer styles a token by.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Function,
    Operator,
    Tag,
    Attribute,
    Punctuation,
    Builtin,
    Text,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Function => "function",
            TokenKind::Operator => "operator",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Builtin => "builtin",
            TokenKind::Text => "text",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified, contiguous slice of the input.
///
/// Serializes as `{"type": "<kind>", "value": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.value)
    }
}

/// Ordered tokens covering one input string.
///
/// Tokens never overlap and concatenate back to the exact input (see
/// [`TokenStream::to_source`]). Rule scanners never emit an empty token;
/// plain text always emits exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream(Vec<Token>);

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuilds the scanned input by concatenating every token value.
    pub fn to_source(&self) -> String {
        self.0.iter().map(|token| token.value.as_str()).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream(tokens)
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
