//! Confidence gating over a probability vector.

use serde::{Deserialize, Serialize};

/// Whether a prediction is trustworthy enough to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Confident,
    NotConfident,
}

/// Gate a probability vector ordered by the model's fixed category order
/// (NOT sorted by value): if any adjacent gap is smaller than `min_gap`,
/// the prediction is `NotConfident` regardless of which category scored
/// highest, and callers must emit `ToInvestigate` instead of committing.
pub fn gate(probabilities: &[f64], min_gap: f64) -> Confidence {
    for pair in probabilities.windows(2) {
        if (pair[0] - pair[1]).abs() < min_gap {
            return Confidence::NotConfident;
        }
    }
    Confidence::Confident
}
