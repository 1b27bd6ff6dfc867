use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    path::Path,
    str::FromStr,
};

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    lexer::{tokenize, Rule},
    rules::{C_LIKE_RULES, MARKUP_RULES, PYTHON_RULES},
    tokens::{Token, TokenKind, TokenStream, JS_KEYWORDS, NO_KEYWORDS, PYTHON_KEYWORDS},
};
use crate::MK_TOKEN;

/// Every recognised language tag, in lower case. Anything else is plain text.
pub const ALIAS_TABLE: &[(&str, Language)] = &[
    ("javascript", Language::CLike),
    ("js", Language::CLike),
    ("typescript", Language::CLike),
    ("ts", Language::CLike),
    ("jsx", Language::CLike),
    ("tsx", Language::CLike),
    ("python", Language::Python),
    ("py", Language::Python),
    ("html", Language::Markup),
];

lazy_static! {
    static ref ALIAS_LOOKUP: HashMap<&'static str, Language> =
        ALIAS_TABLE.iter().copied().collect();
    static ref C_LIKE_SCANNER: RuleScanner = RuleScanner::new(&C_LIKE_RULES, &JS_KEYWORDS);
    static ref PYTHON_SCANNER: RuleScanner = RuleScanner::new(&PYTHON_RULES, &PYTHON_KEYWORDS);
    static ref MARKUP_SCANNER: RuleScanner = RuleScanner::new(&MARKUP_RULES, &NO_KEYWORDS);
}

static PLAIN_TEXT_SCANNER: PlainTextScanner = PlainTextScanner;

/// Turns source text of one language family into a token stream.
///
/// Implementations must be total: every input yields a stream whose values
/// concatenate back to the input.
pub trait LanguageScanner: Sync {
    fn scan(&self, code: &str) -> TokenStream;
}

/// Scanner driven by an ordered rule table.
pub struct RuleScanner {
    rules: &'static [Rule],
    keywords: &'static HashSet<&'static str>,
}

impl RuleScanner {
    pub fn new(rules: &'static [Rule], keywords: &'static HashSet<&'static str>) -> Self {
        RuleScanner { rules, keywords }
    }
}

impl LanguageScanner for RuleScanner {
    fn scan(&self, code: &str) -> TokenStream {
        tokenize(code, self.rules, self.keywords)
    }
}

/// Emits the whole input as a single text token, even when it is empty.
pub struct PlainTextScanner;

impl LanguageScanner for PlainTextScanner {
    fn scan(&self, code: &str) -> TokenStream {
        TokenStream::from(vec![MK_TOKEN!(TokenKind::Text, code.to_string())])
    }
}

/// A family of language tags sharing one scanning rule set.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Language {
    CLike,
    Python,
    Markup,
    PlainText,
}

impl Language {
    /// Resolves a language tag case-insensitively, falling back to plain text.
    pub fn from_alias(tag: &str) -> Language {
        ALIAS_LOOKUP
            .get(tag.to_lowercase().as_str())
            .copied()
            .unwrap_or(Language::PlainText)
    }

    /// Resolves a file by its extension, e.g. `app.tsx` or `index.html`.
    pub fn from_path(path: &Path) -> Language {
        path.extension()
            .and_then(|extension| extension.to_str())
            .map_or(Language::PlainText, Language::from_alias)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::CLike => "c-like",
            Language::Python => "python",
            Language::Markup => "markup",
            Language::PlainText => "plain-text",
        }
    }

    pub fn scanner(&self) -> &'static dyn LanguageScanner {
        match self {
            Language::CLike => &*C_LIKE_SCANNER,
            Language::Python => &*PYTHON_SCANNER,
            Language::Markup => &*MARKUP_SCANNER,
            Language::PlainText => &PLAIN_TEXT_SCANNER,
        }
    }

    pub fn aliases() -> impl Iterator<Item = &'static str> {
        ALIAS_TABLE.iter().map(|(alias, _)| *alias)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Strict lookup: an unrecognised tag is an error instead of plain text.
impl FromStr for Language {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ALIAS_LOOKUP
            .get(tag.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                Error::new(ErrorImpl::UnknownLanguage {
                    language: tag.to_string(),
                })
            })
    }
}
