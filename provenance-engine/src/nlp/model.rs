//! Multinomial naive Bayes over token counts.

use provenance_core::errors::ClassifyError;
use provenance_core::types::collections::{FxHashMap, FxHashSet};
use provenance_core::types::language::Language;
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::tokenizer::tokenize;

/// Labels the classifier distinguishes. `ToInvestigate` carries weak
/// labels — samples a human deferred on — and is optional in a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Framework,
    NotFramework,
    ToInvestigate,
}

/// Labeled corpus: category → documents, in insertion order.
///
/// Insertion order is the model's fixed category order, which the
/// confidence gate depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingSet {
    samples: Vec<(Category, Vec<String>)>,
}

impl TrainingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append documents under a label, creating the label on first use.
    pub fn add_samples<I, S>(&mut self, category: Category, docs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let docs: Vec<String> = docs.into_iter().map(Into::into).collect();
        if let Some((_, existing)) = self.samples.iter_mut().find(|(c, _)| *c == category) {
            existing.extend(docs);
        } else {
            self.samples.push((category, docs));
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.samples.iter().map(|(c, _)| *c).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.iter().all(|(_, docs)| docs.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[String])> {
        self.samples.iter().map(|(c, d)| (c, d.as_slice()))
    }
}

/// Prediction output: best category plus the full probability vector in
/// training-time category order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpResult {
    pub category: Category,
    pub probabilities: Vec<(Category, f64)>,
    pub confidence: Confidence,
}

/// Trained bag-of-words model for one language.
///
/// Immutable once trained for a run; retraining builds a new model.
/// Serializes to JSON for persistence so later runs skip retraining.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    language: Language,
    categories: Vec<Category>,
    token_counts: Vec<FxHashMap<String, u32>>,
    total_tokens: Vec<u64>,
    doc_counts: Vec<u32>,
    vocabulary_size: usize,
}

impl NaiveBayesModel {
    /// Train from a labeled corpus. Laplace-smoothed token likelihoods,
    /// document-frequency priors.
    pub fn train(language: Language, corpus: &TrainingSet) -> Result<Self, ClassifyError> {
        if corpus.is_empty() {
            return Err(ClassifyError::MissingTrainingData { language });
        }

        let mut categories = Vec::new();
        let mut token_counts: Vec<FxHashMap<String, u32>> = Vec::new();
        let mut total_tokens: Vec<u64> = Vec::new();
        let mut doc_counts: Vec<u32> = Vec::new();
        let mut vocabulary: FxHashSet<String> = FxHashSet::default();

        for (category, docs) in corpus.iter() {
            let mut counts: FxHashMap<String, u32> = FxHashMap::default();
            let mut total = 0u64;
            for doc in docs {
                for token in tokenize(doc) {
                    vocabulary.insert(token.clone());
                    *counts.entry(token).or_insert(0) += 1;
                    total += 1;
                }
            }
            categories.push(*category);
            token_counts.push(counts);
            total_tokens.push(total);
            doc_counts.push(docs.len() as u32);
        }

        Ok(Self {
            language,
            categories,
            token_counts,
            total_tokens,
            doc_counts,
            vocabulary_size: vocabulary.len().max(1),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Score text against every category and normalize to a probability
    /// vector in training-time category order. Confidence is left for the
    /// caller's gate.
    pub fn predict(&self, text: &str) -> NlpResult {
        let tokens = tokenize(text);
        let total_docs: u32 = self.doc_counts.iter().sum();

        let log_scores: Vec<f64> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let prior = (self.doc_counts[i].max(1) as f64) / (total_docs.max(1) as f64);
                let denom = self.total_tokens[i] as f64 + self.vocabulary_size as f64;
                let mut score = prior.ln();
                for token in &tokens {
                    let count = self.token_counts[i].get(token).copied().unwrap_or(0);
                    score += ((count as f64 + 1.0) / denom).ln();
                }
                score
            })
            .collect();

        // Log-sum-exp normalization.
        let max = log_scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        let probabilities: Vec<(Category, f64)> = self
            .categories
            .iter()
            .zip(exps.iter())
            .map(|(c, e)| (*c, e / sum))
            .collect();

        // Best category; first encountered wins ties.
        let mut best = 0;
        for (i, (_, p)) in probabilities.iter().enumerate() {
            if *p > probabilities[best].1 {
                best = i;
            }
        }

        NlpResult {
            category: probabilities[best].0,
            probabilities,
            confidence: Confidence::NotConfident,
        }
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> Result<String, ClassifyError> {
        serde_json::to_string(self).map_err(|e| ClassifyError::ModelIo {
            message: e.to_string(),
        })
    }

    /// Deserialize a persisted model.
    pub fn from_json(raw: &str) -> Result<Self, ClassifyError> {
        serde_json::from_str(raw).map_err(|e| ClassifyError::ModelIo {
            message: e.to_string(),
        })
    }
}
