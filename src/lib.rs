//! # palavra-emotion
//!
//! Embedded emotion analysis and verse recommendation for Palavra Conectada.
//!
//! This crate matches free-text emotional input to scripture verses through
//! keyword-based sentiment scoring: no ML models, no external services. It
//! compiles into the serving layer as a library dependency.
//!
//! ## Design
//!
//! - Normalises input (trim, lowercase, one-pass accent folding) and scores
//!   it against per-emotion keyword sets with intensity/negation heuristics
//! - Ranks emotions, derives a bounded organic confidence (never 100), and
//!   detects secondary emotions for mixed sentiment
//! - Ranks verse candidates by relevance weight and draws the recommended
//!   verse uniformly at random from the top set, via an injectable RNG
//! - Graceful degradation: blank input, zero matches, and empty candidate
//!   pools all yield well-defined neutral/empty results, never errors
//!
//! ## Boundaries
//!
//! - No network listeners, no persistence: verse candidates come from a
//!   [`VerseStore`] collaborator, the only asynchronous seam
//! - The emotion catalog is loaded and validated once at startup and is
//!   read-only afterwards; concurrent requests share it without coordination
//! - Raw user text is logged only at trace level

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod themes;
pub mod types;
pub mod verses;

pub use catalog::EmotionCatalog;
pub use config::AnalyzerConfig;
pub use error::{EngineError, Result};
pub use types::{
    AnalysisResult, EmotionDefinition, RecommendationCategory, SecondaryEmotion, VerseCandidate,
    VerseSelection, NEUTRAL_EMOTION,
};
pub use verses::{CachedVerseStore, StaticVerseStore, VerseStore};

/// Analyse user text and detect the predominant emotion.
///
/// Runs the full pipeline: normalise → score → rank → secondaries →
/// message. Never fails: blank input and zero-match input return a neutral
/// result with confidence 0, distinguished only by message content.
///
/// # Examples
///
/// ```
/// let catalog = palavra_emotion::EmotionCatalog::builtin()?;
/// let config = palavra_emotion::AnalyzerConfig::default();
/// let result = palavra_emotion::analyze_emotion("Estou muito triste hoje", &catalog, &config);
/// assert_eq!(result.primary_emotion, "tristeza");
/// assert!(result.confidence > 0);
/// # Ok::<(), palavra_emotion::EngineError>(())
/// ```
pub fn analyze_emotion(
    text: &str,
    catalog: &EmotionCatalog,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    analyzer::run_analysis(text, catalog, config)
}

/// Analyse user text with the built-in catalog and default configuration.
///
/// Convenience wrapper around [`analyze_emotion`].
///
/// # Errors
///
/// Returns [`EngineError::Catalog`] or [`EngineError::Config`] only if the
/// built-in data failed startup validation; the analysis itself never fails.
pub fn analyze_emotion_default(text: &str) -> Result<AnalysisResult> {
    let catalog = EmotionCatalog::builtin()?;
    let config = AnalyzerConfig::default();
    config.validate()?;
    Ok(analyze_emotion(text, &catalog, &config))
}

/// Rank a verse candidate pool and draw a recommended verse with the given
/// randomness source.
///
/// `alternatives` holds the top `limit` candidates by descending relevance
/// weight; `recommended` is a uniform-random member of that set (a
/// deliberate rotation among the best candidates, not the argmax). An empty
/// pool yields `recommended: None`.
pub fn rank_and_select_verses_with<R: rand::Rng>(
    emotion: &str,
    candidates: Vec<VerseCandidate>,
    limit: usize,
    rng: &mut R,
) -> VerseSelection {
    verses::rank_and_select(emotion, candidates, limit, rng)
}

/// Rank a verse candidate pool using thread-local randomness.
///
/// Convenience wrapper around [`rank_and_select_verses_with`]; tests that
/// need determinism should pass a seeded RNG to that function instead.
pub fn rank_and_select_verses(
    emotion: &str,
    candidates: Vec<VerseCandidate>,
    limit: usize,
) -> VerseSelection {
    rank_and_select_verses_with(emotion, candidates, limit, &mut rand::thread_rng())
}
