//! Per-emotion score aggregation and organic confidence.
//!
//! Each emotion's total is the sum of its keyword scores plus a breadth
//! bonus when more than one keyword matched. Confidence is derived from the
//! top score against a fixed calibration ceiling, penalised under ambiguity
//! and capped below certainty:
//!
//! ```text
//! base       = floor(top_score / calibration_ceiling * 100)
//! ambiguous  = top_score - runner_up < ambiguity_gap
//! confidence = clamp(ambiguous ? floor(base * ambiguity_penalty) : base, 0, cap)
//! ```

use crate::catalog::EmotionCatalog;
use crate::config::AnalyzerConfig;
use crate::matcher;
use crate::types::EmotionScore;

/// Bonus per matched keyword when an emotion matched more than one keyword.
/// Rewards breadth of evidence over a single strong hit.
pub const MULTI_KEYWORD_BONUS: i32 = 2;

/// Score every catalog emotion against normalised text.
///
/// Emotions with a total of zero or less are excluded. The result is sorted
/// by descending total; ties are broken by name so ranking is deterministic.
pub fn score_emotions(text: &str, catalog: &EmotionCatalog) -> Vec<EmotionScore> {
    let mut scores: Vec<EmotionScore> = Vec::new();

    for emotion in catalog.all() {
        let mut total = 0;
        let mut matched_keywords = Vec::new();

        for keyword in &emotion.keywords {
            let m = matcher::score_keyword(text, keyword);
            if m.matched {
                tracing::debug!(
                    emotion = %emotion.name,
                    keyword = %keyword,
                    score = m.score,
                    "keyword matched"
                );
                matched_keywords.push(keyword.clone());
            }
            total += m.score;
        }

        if matched_keywords.len() > 1 {
            total += MULTI_KEYWORD_BONUS * matched_keywords.len() as i32;
        }

        if total > 0 {
            scores.push(EmotionScore {
                emotion: emotion.clone(),
                total_score: total,
                matched_keywords,
            });
        }
    }

    scores.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.emotion.name.cmp(&b.emotion.name))
    });
    scores
}

/// Derive the organic confidence for a score in its rank context.
///
/// `runner_up` is the score ranked directly below, when one exists. The
/// result is an integer percentage in `0..=confidence_cap`; it never
/// reaches 100.
pub fn confidence(top_score: i32, runner_up: Option<i32>, config: &AnalyzerConfig) -> u8 {
    if top_score <= 0 {
        return 0;
    }

    let mut value =
        ((f64::from(top_score) / f64::from(config.calibration_ceiling)) * 100.0).floor();

    if let Some(second) = runner_up {
        if top_score - second < config.ambiguity_gap {
            value = (value * config.ambiguity_penalty).floor();
        }
    }

    value.clamp(0.0, f64::from(config.confidence_cap)) as u8
}
