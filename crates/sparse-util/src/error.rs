//! Error type shared by the matrix constructors and operations.

use std::error::Error;
use std::fmt;

/// An argument outside the domain an operation accepts.
///
/// Carries a human-readable message and, where one applies, the name of the
/// offending parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    message: String,
    param: Option<&'static str>,
}

impl InvalidArgument {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            param: None,
        }
    }

    pub(crate) fn for_param(param: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            param: Some(param),
        }
    }

    /// The name of the rejected parameter, when known.
    pub fn param(&self) -> Option<&str> {
        self.param
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param {
            Some(param) => write!(f, "{} (parameter: {})", self.message, param),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for InvalidArgument {}
