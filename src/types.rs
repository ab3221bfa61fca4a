//! Core types for emotion analysis and verse recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary-emotion name reported when no emotion could be detected.
pub const NEUTRAL_EMOTION: &str = "neutral";

/// A named emotion with its keyword set and recommendation category.
///
/// Loaded once at startup as part of the [`crate::catalog::EmotionCatalog`]
/// and immutable during a request. Keywords are stored accent-folded because
/// matching always runs on normalised text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionDefinition {
    /// Display name of the emotion, e.g. `"tristeza"`.
    pub name: String,
    /// Keyword set matched against normalised input.
    pub keywords: Vec<String>,
    /// Human-readable description of the emotion.
    pub description: String,
    /// Which kind of recommendation suits this emotion.
    pub category: RecommendationCategory,
}

/// Recommendation categories an emotion can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    /// Consolation verses for sorrow.
    Comfort,
    /// Praise and celebration.
    Praise,
    /// Courage and protection promises.
    Courage,
    /// Peace and stillness.
    Peace,
    /// The presence of God in loneliness.
    Companionship,
    /// Forgiveness and reconciliation.
    Forgiveness,
    /// Thanksgiving.
    Thanksgiving,
    /// Encouragement and future hope.
    Encouragement,
}

impl RecommendationCategory {
    /// Returns the canonical Portuguese label for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Comfort => "consolo",
            Self::Praise => "louvor",
            Self::Courage => "coragem",
            Self::Peace => "paz",
            Self::Companionship => "companhia",
            Self::Forgiveness => "perdão",
            Self::Thanksgiving => "ação de graças",
            Self::Encouragement => "encorajamento",
        }
    }

    /// Returns all category variants.
    pub fn all() -> &'static [RecommendationCategory] {
        &[
            Self::Comfort,
            Self::Praise,
            Self::Courage,
            Self::Peace,
            Self::Companionship,
            Self::Forgiveness,
            Self::Thanksgiving,
            Self::Encouragement,
        ]
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-emotion score accumulated during a single analysis call.
///
/// Ephemeral: built, ranked, and discarded inside one request.
#[derive(Debug, Clone)]
pub struct EmotionScore {
    /// The emotion this score belongs to.
    pub emotion: EmotionDefinition,
    /// Sum of keyword scores plus the multi-keyword bonus.
    pub total_score: i32,
    /// Which of the emotion's keywords matched the input.
    pub matched_keywords: Vec<String>,
}

/// A runner-up emotion close enough to the top score to indicate mixed
/// sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryEmotion {
    /// Emotion name.
    pub name: String,
    /// Confidence derived from this emotion's own rank context.
    pub confidence: u8,
    /// The emotion's total score.
    pub score: i32,
}

/// The outcome of one emotion analysis.
///
/// Always structurally complete: the neutral path fills every field with
/// well-defined empty values rather than signalling an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected emotion name, or [`NEUTRAL_EMOTION`].
    pub primary_emotion: String,
    /// Organic confidence in 0..=95. Never 100.
    pub confidence: u8,
    /// Runner-up emotions, descending by score. Never contains the primary.
    pub secondary_emotions: Vec<SecondaryEmotion>,
    /// Keywords of the primary emotion found in the input.
    pub matched_keywords: Vec<String>,
    /// Human-readable feedback composed from independent clauses.
    pub message: String,
    /// Description of the primary emotion. `None` on the neutral path.
    pub description: Option<String>,
    /// Recommendation category of the primary emotion. `None` on the
    /// neutral path.
    pub category: Option<RecommendationCategory>,
}

impl AnalysisResult {
    /// Build the neutral result used for empty input and no-match outcomes.
    /// The two cases differ only in `message`.
    pub fn neutral(message: String) -> Self {
        Self {
            primary_emotion: NEUTRAL_EMOTION.to_string(),
            confidence: 0,
            secondary_emotions: Vec::new(),
            matched_keywords: Vec::new(),
            message,
            description: None,
            category: None,
        }
    }

    /// Whether this is a neutral (undetected) result.
    pub fn is_neutral(&self) -> bool {
        self.primary_emotion == NEUTRAL_EMOTION
    }
}

/// A verse supplied by an external verse-lookup collaborator, ready for
/// relevance ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseCandidate {
    /// Stable identifier from the supplying store.
    pub id: u64,
    /// Verse text.
    pub text: String,
    /// Human-readable reference, e.g. `"Salmos 34:18"`.
    pub reference: String,
    /// How strongly the verse is associated with the emotion, 1..=10.
    pub relevance_weight: u8,
}

/// Result of ranking a candidate pool: one recommended verse drawn at random
/// from the top set, plus the full ranked top set as alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseSelection {
    /// Uniform-random member of `alternatives`, or `None` for an empty pool.
    pub recommended: Option<VerseCandidate>,
    /// The top candidates, descending by relevance weight.
    pub alternatives: Vec<VerseCandidate>,
}
