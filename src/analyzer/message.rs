//! Feedback-message composition.
//!
//! Messages are assembled from independently composed clauses, never a
//! single hardcoded string: a confidence-band phrase, an optional secondary
//! clause, and an optional situational clause when the text carries a
//! temporal marker. Adding per-emotion phrasing extends this module without
//! touching callers.

use crate::matcher::contains_word;
use crate::types::{EmotionDefinition, SecondaryEmotion};

/// Confidence at or above which the message asserts the emotion.
const ASSERTIVE_BAND: u8 = 80;
/// Confidence at or above which the message hedges; below it, it only notes
/// a trace.
const HEDGED_BAND: u8 = 50;

/// Temporal markers that trigger the situational clause. Stored
/// accent-folded, matched as whole words against normalised text.
const TEMPORAL_MARKERS: &[&str] = &["hoje", "agora"];

/// Compose the user-facing message for a detected emotion.
pub fn compose_message(
    emotion: &EmotionDefinition,
    confidence: u8,
    secondaries: &[SecondaryEmotion],
    normalized_text: &str,
) -> String {
    let mut clauses = vec![band_clause(&emotion.name, confidence)];

    if let Some(secondary) = secondaries.first() {
        clauses.push(format!("Também há sinais de {}.", secondary.name));
    }

    if has_temporal_marker(normalized_text) {
        clauses.push("Que estas palavras falem ao seu momento presente.".to_string());
    }

    clauses.join(" ")
}

/// Message for blank input.
pub fn empty_input_message() -> String {
    "Nenhum texto fornecido.".to_string()
}

/// Guidance message when no emotion scored above zero.
pub fn no_match_message() -> String {
    "Não consegui identificar uma emoção específica. \
     Tente frases como 'Estou triste' ou 'Estou com medo'."
        .to_string()
}

fn band_clause(emotion_name: &str, confidence: u8) -> String {
    if confidence >= ASSERTIVE_BAND {
        format!("Percebi que você está sentindo {emotion_name}.")
    } else if confidence >= HEDGED_BAND {
        format!("Você pode estar sentindo {emotion_name}.")
    } else {
        format!("Notei um traço de {emotion_name} no que você escreveu.")
    }
}

fn has_temporal_marker(normalized_text: &str) -> bool {
    TEMPORAL_MARKERS
        .iter()
        .any(|marker| contains_word(normalized_text, marker))
}
