//! Web-evidence lookup for the NLP fallback.

pub mod web;

pub use web::WebEvidenceSource;
