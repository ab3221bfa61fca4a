//! Analyzer configuration with sensible defaults.
//!
//! [`AnalyzerConfig`] holds the calibration constants behind the organic
//! confidence score and secondary-emotion detection. The defaults match the
//! production tuning; validation happens once at startup, never per request.

use crate::error::EngineError;

/// Configuration for emotion analysis.
///
/// Use [`Default::default()`] for the production tuning, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Score treated as the maximum plausible single-emotion total. The
    /// confidence base is `floor(top_score / calibration_ceiling * 100)`.
    pub calibration_ceiling: i32,
    /// Hard upper bound on reported confidence. Must stay below 100 so the
    /// engine never claims absolute certainty.
    pub confidence_cap: u8,
    /// When the runner-up emotion is within this many points of the top
    /// score, the result is considered ambiguous.
    pub ambiguity_gap: i32,
    /// Multiplier applied to the confidence base under ambiguity.
    pub ambiguity_penalty: f64,
    /// A runner-up qualifies as a secondary emotion when its score is at
    /// least this fraction of the top score.
    pub secondary_ratio: f64,
    /// Maximum number of secondary emotions reported.
    pub max_secondaries: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            calibration_ceiling: 50,
            confidence_cap: 95,
            ambiguity_gap: 5,
            ambiguity_penalty: 0.7,
            secondary_ratio: 0.5,
            max_secondaries: 2,
        }
    }
}

impl AnalyzerConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `calibration_ceiling` must be greater than 0
    /// - `confidence_cap` must be in 1..=99 (never 100)
    /// - `ambiguity_gap` must not be negative
    /// - `ambiguity_penalty` must be in (0.0, 1.0]
    /// - `secondary_ratio` must be in (0.0, 1.0]
    /// - `max_secondaries` must be greater than 0
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.calibration_ceiling <= 0 {
            return Err(EngineError::Config(
                "calibration_ceiling must be greater than 0".into(),
            ));
        }
        if self.confidence_cap == 0 || self.confidence_cap >= 100 {
            return Err(EngineError::Config(
                "confidence_cap must be in 1..=99".into(),
            ));
        }
        if self.ambiguity_gap < 0 {
            return Err(EngineError::Config(
                "ambiguity_gap must not be negative".into(),
            ));
        }
        if !(self.ambiguity_penalty > 0.0 && self.ambiguity_penalty <= 1.0) {
            return Err(EngineError::Config(
                "ambiguity_penalty must be in (0.0, 1.0]".into(),
            ));
        }
        if !(self.secondary_ratio > 0.0 && self.secondary_ratio <= 1.0) {
            return Err(EngineError::Config(
                "secondary_ratio must be in (0.0, 1.0]".into(),
            ));
        }
        if self.max_secondaries == 0 {
            return Err(EngineError::Config(
                "max_secondaries must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
