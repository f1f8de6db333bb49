// ---------------------------------------------------------------------------
// EngineError: validation and sampling failures reported to the caller
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors the engine reports before (or instead of) producing numbers.
///
/// Every variant carries enough context for a caller to tell the user which
/// input was wrong and what was expected of it.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A physical parameter, box bound or distribution parameter lies outside
    /// its declared domain.
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// A simulation setting (horizon, sample counts, ...) is unusable.
    InvalidConfig { name: &'static str, reason: String },
    /// Paired samples must have the same length.
    SampleLengthMismatch { left: usize, right: usize },
    /// Too few observations for the requested statistic.
    InsufficientSamples { needed: usize, found: usize },
}

impl EngineError {
    pub(crate) fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        EngineError::InvalidParameter {
            name,
            value,
            expected,
        }
    }

    pub(crate) fn config(name: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidParameter {
                name,
                value,
                expected,
            } => write!(f, "Invalid parameter `{name}` = {value}: expected {expected}"),
            EngineError::InvalidConfig { name, reason } => {
                write!(f, "Invalid configuration `{name}`: {reason}")
            }
            EngineError::SampleLengthMismatch { left, right } => write!(
                f,
                "Paired samples differ in length: {left} vs {right}"
            ),
            EngineError::InsufficientSamples { needed, found } => write!(
                f,
                "Insufficient samples: need at least {needed}, found {found}"
            ),
        }
    }
}

impl std::error::Error for EngineError {}
