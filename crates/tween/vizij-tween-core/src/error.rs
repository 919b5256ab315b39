//! Error types for the tween engine

use serde::{Deserialize, Serialize};

/// Errors raised while configuring a tween or resolving an easing curve.
///
/// Both families are caller mistakes; the engine never substitutes a default.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Tween configuration rejected (e.g. non-positive duration)
    #[error("Invalid tween configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Easing family/variant pair is not registered
    #[error("Unknown easing curve: {family}.{variant}")]
    UnknownCurve { family: String, variant: String },

    /// Malformed JSON payload
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

impl TweenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_curve(family: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::UnknownCurve {
            family: family.into(),
            variant: variant.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "config",
            Self::UnknownCurve { .. } => "easing",
            Self::Parse { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
