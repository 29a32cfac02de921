//! Canonical framework identities stored in the knowledge base.

use serde::{Deserialize, Serialize};

use super::language::Language;

/// Five-level taxonomy attached to a framework record.
///
/// Levels 1–4 come from the catalog's own hierarchy; level 5 is the
/// specific sub-identity minted when a concrete boundary is discovered
/// under a previously generic root match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub level1: Option<String>,
    pub level2: Option<String>,
    pub level3: Option<String>,
    pub level4: Option<String>,
    pub level5: Option<String>,
}

impl Taxonomy {
    /// Copy of this taxonomy with level 5 replaced.
    pub fn with_level5(&self, label: impl Into<String>) -> Taxonomy {
        Taxonomy {
            level5: Some(label.into()),
            ..self.clone()
        }
    }
}

/// Canonical, externally stored framework identity.
///
/// Literal patterns cover symbols by path prefix; regex patterns by match.
/// The knowledge-base lookup key is `(pattern, language)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkRecord {
    pub name: String,
    /// Literal prefix or regular expression, per `is_regex`.
    pub pattern: String,
    pub is_regex: bool,
    pub language: Language,
    /// A root record matches a whole generic namespace with no specific
    /// sub-identity yet; children minted under it narrow the match.
    pub is_root: bool,
    pub taxonomy: Taxonomy,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl FrameworkRecord {
    /// Whether this record's pattern covers the given symbol name.
    ///
    /// Literal patterns match the exact path and anything nested below it;
    /// regex patterns delegate to the regex engine. An invalid stored regex
    /// matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        if self.is_regex {
            match regex::Regex::new(&self.pattern) {
                Ok(re) => re.is_match(name),
                Err(_) => false,
            }
        } else {
            name == self.pattern
                || name
                    .strip_prefix(&self.pattern)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('/'))
        }
    }
}
