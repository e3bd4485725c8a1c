//! Validated book codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which identifier scheme a [`BookCode`] uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Amazon Standard Identification Number
    Asin,
    /// 13-digit ISBN
    Isbn13,
}

/// A product code that passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookCode {
    pub kind: CodeKind,
    pub value: String,
}

impl BookCode {
    pub fn asin(value: impl Into<String>) -> Self {
        Self {
            kind: CodeKind::Asin,
            value: value.into(),
        }
    }

    pub fn isbn13(value: impl Into<String>) -> Self {
        Self {
            kind: CodeKind::Isbn13,
            value: value.into(),
        }
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
