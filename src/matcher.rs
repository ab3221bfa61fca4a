//! Per-keyword scoring against normalised text.
//!
//! Scoring policy:
//! - Whole-word match (keyword bounded by non-word characters or string
//!   edges): base score 10.
//! - Substring-only match (keyword embedded in a longer word): base score 3.
//! - Whole-word match with an intensity word within 2 words on either side:
//!   +5.
//! - Whole-word match with a negation word within the 2 words immediately
//!   before it: −8, floored at 0.
//!
//! Negation and intensity are local, proximity-based heuristics over word
//! windows, not parse-based scope analysis. Modifiers never apply to
//! substring matches.

/// Base score for a whole-word keyword match.
pub const WHOLE_WORD_SCORE: i32 = 10;
/// Base score when the keyword only appears inside a longer word.
pub const SUBSTRING_SCORE: i32 = 3;
/// Bonus when an intensity word appears near a whole-word match.
pub const INTENSITY_BONUS: i32 = 5;
/// Penalty when a negation word directly precedes a whole-word match.
pub const NEGATION_PENALTY: i32 = 8;

/// Word-window size for intensity and negation lookups.
const MODIFIER_WINDOW: usize = 2;

/// Intensity amplifiers, stored accent-folded ("tão" → "tao") because
/// matching runs on normalised text.
const INTENSITY_WORDS: &[&str] = &[
    "muito",
    "extremamente",
    "totalmente",
    "completamente",
    "realmente",
    "demais",
    "bastante",
    "tanto",
    "tao",
    "super",
    "ultra",
];

/// Negation words, stored accent-folded ("não" → "nao").
const NEGATION_WORDS: &[&str] = &["nao", "nem", "nunca", "jamais", "nenhum", "nada"];

/// Outcome of scoring one keyword against one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Score contribution of this keyword. Never negative.
    pub score: i32,
    /// Whether the keyword occurred at all (whole word or substring).
    pub matched: bool,
}

impl KeywordMatch {
    const NO_MATCH: Self = Self {
        score: 0,
        matched: false,
    };
}

/// Score a single keyword against normalised text.
///
/// When the keyword occurs as a whole word more than once, the best-scoring
/// occurrence wins, so one nearby negation cannot cancel an unrelated later
/// mention. Multi-word keywords match as consecutive word runs.
pub fn score_keyword(text: &str, keyword: &str) -> KeywordMatch {
    if text.is_empty() || keyword.is_empty() {
        return KeywordMatch::NO_MATCH;
    }

    let words = tokenize(text);
    let keyword_words = tokenize(keyword);

    let mut best: Option<i32> = None;
    if !keyword_words.is_empty() && words.len() >= keyword_words.len() {
        for start in 0..=(words.len() - keyword_words.len()) {
            if words[start..start + keyword_words.len()] != keyword_words[..] {
                continue;
            }
            let mut score = WHOLE_WORD_SCORE;
            if has_intensity_nearby(&words, start, keyword_words.len()) {
                score += INTENSITY_BONUS;
            }
            if has_negation_before(&words, start) {
                score -= NEGATION_PENALTY;
            }
            best = Some(best.map_or(score, |b| b.max(score)));
        }
    }

    if let Some(score) = best {
        return KeywordMatch {
            score: score.max(0),
            matched: true,
        };
    }

    if text.contains(keyword) {
        return KeywordMatch {
            score: SUBSTRING_SCORE,
            matched: true,
        };
    }

    KeywordMatch::NO_MATCH
}

/// Split text into words on non-alphanumeric boundaries.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether `word` occurs as a whole word in `text`.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    tokenize(text).iter().any(|w| *w == word)
}

/// Intensity word within the window before or after the matched run.
fn has_intensity_nearby(words: &[&str], start: usize, keyword_len: usize) -> bool {
    let before = &words[start.saturating_sub(MODIFIER_WINDOW)..start];
    let after_start = start + keyword_len;
    let after = &words[after_start..(after_start + MODIFIER_WINDOW).min(words.len())];
    before
        .iter()
        .chain(after.iter())
        .any(|w| INTENSITY_WORDS.contains(w))
}

/// Negation word within the window immediately before the matched run.
fn has_negation_before(words: &[&str], start: usize) -> bool {
    words[start.saturating_sub(MODIFIER_WINDOW)..start]
        .iter()
        .any(|w| NEGATION_WORDS.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_scores_base_10() {
        let m = score_keyword("estou triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
        assert!(m.matched);
    }

    #[test]
    fn whole_word_at_string_edges() {
        assert_eq!(score_keyword("triste", "triste").score, WHOLE_WORD_SCORE);
        assert_eq!(
            score_keyword("triste demais para sair", "triste").score,
            WHOLE_WORD_SCORE + INTENSITY_BONUS
        );
    }

    #[test]
    fn punctuation_counts_as_word_boundary() {
        let m = score_keyword("que dia triste, meu amigo", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
    }

    #[test]
    fn substring_scores_3() {
        // "triste" embedded in "tristeza".
        let m = score_keyword("a tristeza chegou", "triste");
        assert_eq!(m.score, SUBSTRING_SCORE);
        assert!(m.matched);
    }

    #[test]
    fn no_occurrence_scores_0_unmatched() {
        let m = score_keyword("estou feliz", "triste");
        assert_eq!(m.score, 0);
        assert!(!m.matched);
    }

    #[test]
    fn empty_text_or_keyword_never_match() {
        assert!(!score_keyword("", "triste").matched);
        assert!(!score_keyword("estou triste", "").matched);
    }

    #[test]
    fn intensity_before_adds_bonus() {
        let m = score_keyword("estou muito triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE + INTENSITY_BONUS);
    }

    #[test]
    fn intensity_after_adds_bonus() {
        let m = score_keyword("estou triste demais", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE + INTENSITY_BONUS);
    }

    #[test]
    fn intensity_outside_window_ignored() {
        // "muito" is three words away from "triste".
        let m = score_keyword("muito cedo para estar triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
    }

    #[test]
    fn intensity_bonus_applied_once() {
        let m = score_keyword("muito triste demais", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE + INTENSITY_BONUS);
    }

    #[test]
    fn negation_directly_before_reduces_score() {
        let m = score_keyword("nao triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE - NEGATION_PENALTY);
        assert!(m.matched);
    }

    #[test]
    fn negation_within_two_words_reduces_score() {
        // "nao estou triste": negation two words before the keyword.
        let m = score_keyword("nao estou triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE - NEGATION_PENALTY);
    }

    #[test]
    fn negation_strictly_reduces_versus_plain_text() {
        let plain = score_keyword("estou triste", "triste");
        let negated = score_keyword("nao estou triste", "triste");
        assert!(negated.score < plain.score);
    }

    #[test]
    fn negation_outside_window_ignored() {
        let m = score_keyword("nao vou dizer que estou triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
    }

    #[test]
    fn negation_and_intensity_combine() {
        let m = score_keyword("nao muito triste", "triste");
        assert_eq!(
            m.score,
            WHOLE_WORD_SCORE + INTENSITY_BONUS - NEGATION_PENALTY
        );
    }

    #[test]
    fn score_never_negative() {
        let m = score_keyword("nao triste", "triste");
        assert!(m.score >= 0);
    }

    #[test]
    fn negation_does_not_affect_substring_match() {
        // Substring matches take the flat score, no modifiers.
        let m = score_keyword("nao ha tristeza aqui", "triste");
        assert_eq!(m.score, SUBSTRING_SCORE);
    }

    #[test]
    fn best_occurrence_wins_over_negated_one() {
        // First occurrence negated, second clean: the clean one scores.
        let m = score_keyword("nao triste ontem mas hoje estou triste", "triste");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
    }

    #[test]
    fn whole_word_always_at_least_substring_absent_negation() {
        let whole = score_keyword("estou triste", "triste");
        let sub = score_keyword("a tristeza chegou", "triste");
        assert!(whole.score >= sub.score);
    }

    #[test]
    fn multi_word_keyword_matches_consecutive_run() {
        let m = score_keyword("com acao de gracas no coracao", "acao de gracas");
        assert_eq!(m.score, WHOLE_WORD_SCORE);
    }

    #[test]
    fn contains_word_requires_word_boundary() {
        assert!(contains_word("estou triste hoje", "hoje"));
        assert!(!contains_word("hojezinho", "hoje"));
    }

    #[test]
    fn tokenize_splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("estou triste, muito triste!"),
            vec!["estou", "triste", "muito", "triste"]
        );
    }
}
