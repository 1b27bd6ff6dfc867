use std::fmt::Display;

use thiserror::Error;

use crate::lexer::languages::Language;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn io(path: impl Into<String>, error: std::io::Error) -> Self {
        Error::new(ErrorImpl::Io {
            path: path.into(),
            message: error.to_string(),
        })
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownLanguage { .. } => "UnknownLanguage",
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::Serialize { .. } => "Serialize",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownLanguage { language } => ErrorTip::Suggestion(format!(
                "`{}` is not a known language, expected one of: {}",
                language,
                Language::aliases().collect::<Vec<_>>().join(", ")
            )),
            ErrorImpl::Io { path, .. } => ErrorTip::Suggestion(format!(
                "Check that `{}` exists and is readable",
                path
            )),
            ErrorImpl::Serialize { .. } => ErrorTip::None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::io("<unknown>", error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorImpl::Serialize {
            message: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown language: {language:?}")]
    UnknownLanguage { language: String },
    #[error("could not read {path:?}: {message}")]
    Io { path: String, message: String },
    #[error("could not serialize tokens: {message}")]
    Serialize { message: String },
}
