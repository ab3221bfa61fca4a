//! Full analysis pipeline: normalise, score, rank, detect secondaries,
//! compose.
//!
//! The pipeline is pure and synchronous over request-scoped inputs. It never
//! fails: blank input and zero-match input both degrade to the neutral
//! result, distinguished only by message content.

use crate::analyzer::message;
use crate::analyzer::scoring::{confidence, score_emotions};
use crate::analyzer::secondary::detect_secondaries;
use crate::catalog::EmotionCatalog;
use crate::config::AnalyzerConfig;
use crate::normalize::normalize;
use crate::types::AnalysisResult;

/// Analyse user text against the emotion catalog.
///
/// # Pipeline
///
/// 1. Blank input short-circuits to the neutral result
/// 2. Normalise (trim, lowercase, accent-fold)
/// 3. Score every emotion; drop zero totals; rank descending
/// 4. No emotion scored → neutral result with guidance message
/// 5. Derive organic confidence for the top emotion
/// 6. Detect secondary emotions among the runners-up
/// 7. Compose the clause-based message
pub fn run_analysis(
    text: &str,
    catalog: &EmotionCatalog,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    // 1. Blank input degrades, never errors.
    if text.trim().is_empty() {
        return AnalysisResult::neutral(message::empty_input_message());
    }

    // Raw user text only at trace level.
    tracing::trace!(text = %text, "analysing user text");

    // 2–3. Normalise and rank.
    let normalized = normalize(text);
    let ranked = score_emotions(&normalized, catalog);

    // 4. Nothing matched.
    let Some(top) = ranked.first() else {
        tracing::info!("no emotion matched");
        return AnalysisResult::neutral(message::no_match_message());
    };

    // 5. Confidence for the top emotion against its runner-up.
    let conf = confidence(
        top.total_score,
        ranked.get(1).map(|second| second.total_score),
        config,
    );

    // 6–7. Secondaries and message.
    let secondaries = detect_secondaries(&ranked, config);
    let composed = message::compose_message(&top.emotion, conf, &secondaries, &normalized);

    tracing::info!(
        emotion = %top.emotion.name,
        confidence = conf,
        score = top.total_score,
        secondaries = secondaries.len(),
        "emotion detected"
    );

    AnalysisResult {
        primary_emotion: top.emotion.name.clone(),
        confidence: conf,
        secondary_emotions: secondaries,
        matched_keywords: top.matched_keywords.clone(),
        message: composed,
        description: Some(top.emotion.description.clone()),
        category: Some(top.emotion.category),
    }
}
