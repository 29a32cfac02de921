//! Tokenization for the bag-of-words model.

/// Lowercased alphanumeric tokens, single characters dropped.
///
/// Splits on anything that is not alphanumeric, so both free text
/// ("HTTP client library for Java") and dotted paths
/// ("org.apache.commons.io") decompose the same way.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 1)
        .map(|t| t.to_lowercase())
        .collect()
}
