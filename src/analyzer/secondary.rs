//! Secondary (mixed) emotion detection.
//!
//! Emotions ranked 2nd and 3rd qualify as secondaries when their score is
//! within the configured fraction of the top score. Each entry carries a
//! confidence derived from its own rank context, so a distant third reads
//! weaker than a close second.

use crate::config::AnalyzerConfig;
use crate::types::{EmotionScore, SecondaryEmotion};

use super::scoring::confidence;

/// Select runner-up emotions from the ranked score list.
///
/// Returns at most `config.max_secondaries` entries (ranks 2 and 3 under
/// the default tuning), in descending score order. The primary emotion is
/// never included. An empty or single-entry ranking yields no secondaries.
pub fn detect_secondaries(
    ranked: &[EmotionScore],
    config: &AnalyzerConfig,
) -> Vec<SecondaryEmotion> {
    let Some(top) = ranked.first() else {
        return Vec::new();
    };
    let threshold = f64::from(top.total_score) * config.secondary_ratio;

    ranked
        .iter()
        .enumerate()
        .skip(1)
        .take(config.max_secondaries)
        .filter(|(_, score)| f64::from(score.total_score) >= threshold)
        .map(|(rank, score)| SecondaryEmotion {
            name: score.emotion.name.clone(),
            confidence: confidence(
                score.total_score,
                ranked.get(rank + 1).map(|next| next.total_score),
                config,
            ),
            score: score.total_score,
        })
        .collect()
}
