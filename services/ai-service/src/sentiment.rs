//! Keyword-based sentiment heuristic.
//!
//! The label is fully determined by counting marker words from two fixed
//! vocabularies against the lowercased input. Matching is by substring
//! containment, not tokenized word match, so a marker appearing inside a
//! longer word still counts. Ties (including zero matches on both sides)
//! resolve to neutral.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ApiError;

const POSITIVE_MARKERS: [&str; 7] = [
    "bueno",
    "excelente",
    "genial",
    "feliz",
    "increíble",
    "fantástico",
    "amor",
];

const NEGATIVE_MARKERS: [&str; 7] = [
    "malo",
    "terrible",
    "horrible",
    "triste",
    "odio",
    "desastre",
    "pésimo",
];

const POSITIVE_CONFIDENCE: f64 = 0.85;
const NEGATIVE_CONFIDENCE: f64 = 0.82;
const NEUTRAL_CONFIDENCE: f64 = 0.78;

const POSITIVE_EMOTIONS: [(&str, f64); 4] = [
    ("alegría", 0.75),
    ("satisfacción", 0.65),
    ("entusiasmo", 0.55),
    ("tristeza", 0.15),
];

const NEGATIVE_EMOTIONS: [(&str, f64); 4] = [
    ("tristeza", 0.70),
    ("frustración", 0.60),
    ("enojo", 0.50),
    ("alegría", 0.10),
];

const NEUTRAL_EMOTIONS: [(&str, f64); 4] = [
    ("neutral", 0.70),
    ("curiosidad", 0.45),
    ("interés", 0.40),
    ("confusión", 0.20),
];

const MAX_KEYWORDS: usize = 5;

// Keywords must be strictly longer than this many characters.
const MIN_KEYWORD_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone)]
pub struct SentimentReport {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub emotions: BTreeMap<&'static str, f64>,
    pub keywords: Vec<String>,
}

/// Classifies `text` and extracts up to five keywords.
///
/// Pure function of its input; empty text is an `InvalidInput` error rather
/// than a result.
pub fn analyze(text: &str) -> Result<SentimentReport, ApiError> {
    if text.is_empty() {
        return Err(ApiError::InvalidInput("No text provided".to_string()));
    }

    let lowered = text.to_lowercase();
    let positive = POSITIVE_MARKERS
        .iter()
        .filter(|w| lowered.contains(*w))
        .count();
    let negative = NEGATIVE_MARKERS
        .iter()
        .filter(|w| lowered.contains(*w))
        .count();

    let (label, confidence, emotions) = match positive.cmp(&negative) {
        Ordering::Greater => (
            SentimentLabel::Positive,
            POSITIVE_CONFIDENCE,
            &POSITIVE_EMOTIONS,
        ),
        Ordering::Less => (
            SentimentLabel::Negative,
            NEGATIVE_CONFIDENCE,
            &NEGATIVE_EMOTIONS,
        ),
        Ordering::Equal => (
            SentimentLabel::Neutral,
            NEUTRAL_CONFIDENCE,
            &NEUTRAL_EMOTIONS,
        ),
    };

    Ok(SentimentReport {
        label,
        confidence,
        emotions: emotions.iter().copied().collect(),
        keywords: extract_keywords(text),
    })
}

/// First five whitespace-separated words longer than five characters, taken
/// from the original (not lowercased) text in order.
fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
