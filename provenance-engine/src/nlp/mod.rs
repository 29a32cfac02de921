//! Statistical text classification fallback.
//!
//! A per-language bag-of-words categorizer over `Framework` /
//! `NotFramework` (plus weakly-labeled `ToInvestigate`) corpora, with a
//! confidence-gating policy that defers uncertain calls to review instead
//! of mis-tagging.

pub mod confidence;
pub mod model;
pub mod tokenizer;

pub use confidence::{gate, Confidence};
pub use model::{Category, NaiveBayesModel, NlpResult, TrainingSet};

use provenance_core::errors::ClassifyError;
use provenance_core::types::language::Language;

/// Confidence-gated prediction front end over one language's model.
///
/// The model is immutable once trained for a run; retraining replaces it
/// wholesale. Invoking an untrained classifier lazily trains from the held
/// corpus, and is fatal only when no training data exists at all.
pub struct TextClassifier {
    language: Language,
    model: Option<NaiveBayesModel>,
    corpus: Option<TrainingSet>,
    min_confidence_gap: f64,
}

impl TextClassifier {
    /// An untrained classifier; attach a corpus before classifying.
    pub fn new(language: Language, min_confidence_gap: f64) -> Self {
        Self {
            language,
            model: None,
            corpus: None,
            min_confidence_gap,
        }
    }

    /// A classifier around a previously persisted model.
    pub fn with_model(model: NaiveBayesModel, min_confidence_gap: f64) -> Self {
        Self {
            language: model.language(),
            model: Some(model),
            corpus: None,
            min_confidence_gap,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&NaiveBayesModel> {
        self.model.as_ref()
    }

    /// Corpus used for (re)training; kept so a first classification can
    /// train lazily.
    pub fn set_corpus(&mut self, corpus: TrainingSet) {
        self.corpus = Some(corpus);
    }

    /// Train (or retrain) from the held corpus, replacing any existing
    /// model wholesale.
    pub fn train(&mut self) -> Result<(), ClassifyError> {
        let corpus = self
            .corpus
            .as_ref()
            .ok_or(ClassifyError::MissingTrainingData {
                language: self.language,
            })?;
        self.model = Some(NaiveBayesModel::train(self.language, corpus)?);
        Ok(())
    }

    /// Classify free text, training lazily on first use if needed.
    pub fn classify(&mut self, text: &str) -> Result<NlpResult, ClassifyError> {
        if self.model.is_none() {
            tracing::debug!(language = %self.language, "lazy-training text classifier");
            self.train()?;
        }
        let model = self
            .model
            .as_ref()
            .ok_or(ClassifyError::UntrainedModel {
                language: self.language,
            })?;
        let mut result = model.predict(text);
        let probs: Vec<f64> = result.probabilities.iter().map(|(_, p)| *p).collect();
        result.confidence = gate(&probs, self.min_confidence_gap);
        Ok(result)
    }
}
