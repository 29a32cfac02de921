//! Source languages and their naming conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages whose external symbols the engine classifies.
///
/// The delimiter decides which tree-building strategy applies: delimited
/// names go through the namespace tree, flat names through the family
/// clusterer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    CSharp,
    Python,
    JavaScript,
    Cobol,
}

impl Language {
    /// Package delimiter for qualified names; `None` means the language has
    /// no machine-parseable hierarchy (flat names).
    pub fn delimiter(&self) -> Option<char> {
        match self {
            Language::Java | Language::CSharp | Language::Python | Language::JavaScript => {
                Some('.')
            }
            Language::Cobol => None,
        }
    }

    /// Stable identifier used as a storage key.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cobol => "cobol",
        }
    }

    /// Parse a storage key back into a language.
    pub fn from_key(key: &str) -> Option<Language> {
        match key {
            "java" => Some(Language::Java),
            "csharp" => Some(Language::CSharp),
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "cobol" => Some(Language::Cobol),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
