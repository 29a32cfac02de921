//! Classification outcomes attached to symbols.

use serde::{Deserialize, Serialize};

use super::framework::FrameworkRecord;

/// Outcome of classifying one symbol (or one tree node's members).
///
/// Attached to symbols through `GraphStore::tag_symbol`, never stored on
/// the tree itself. `ToInvestigate` is deliberate: under uncertainty the
/// engine defers to later review instead of forcing a binary call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    KnownFramework(FrameworkRecord),
    ToInvestigate,
    NotFramework,
    Unresolved,
}

impl Classification {
    pub fn kind(&self) -> ClassificationKind {
        match self {
            Classification::KnownFramework(_) => ClassificationKind::KnownFramework,
            Classification::ToInvestigate => ClassificationKind::ToInvestigate,
            Classification::NotFramework => ClassificationKind::NotFramework,
            Classification::Unresolved => ClassificationKind::Unresolved,
        }
    }

    /// Resolved framework name, when there is one.
    pub fn framework_name(&self) -> Option<&str> {
        match self {
            Classification::KnownFramework(rec) => Some(rec.name.as_str()),
            _ => None,
        }
    }
}

/// Discriminant-only view of a classification, used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    KnownFramework,
    ToInvestigate,
    NotFramework,
    Unresolved,
}
