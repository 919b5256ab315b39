//! Tween construction config.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::Result;

/// Total number of cycles a tween plays before completing.
///
/// Serialized as a plain integer where `0` means infinite.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum LoopCount {
    Finite(NonZeroU32),
    Infinite,
}

impl LoopCount {
    /// A single-shot tween.
    pub const ONCE: LoopCount = LoopCount::Finite(NonZeroU32::MIN);

    /// Map a raw loop count: `0` is infinite, values above `u32::MAX` saturate.
    /// Negative counts are also treated as infinite.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            log::warn!("negative loop count {raw} treated as infinite");
        }
        if raw < 1 {
            return Self::Infinite;
        }
        let n = u32::try_from(raw).unwrap_or(u32::MAX);
        NonZeroU32::new(n).map_or(Self::Infinite, Self::Finite)
    }

    /// Raw form; `0` for infinite.
    #[inline]
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Finite(n) => i64::from(n.get()),
            Self::Infinite => 0,
        }
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Exactly one cycle configured.
    #[inline]
    pub fn is_single_shot(&self) -> bool {
        *self == Self::ONCE
    }

    /// Finite target, if any.
    #[inline]
    pub fn target(&self) -> Option<u32> {
        match self {
            Self::Finite(n) => Some(n.get()),
            Self::Infinite => None,
        }
    }

    /// Whether `completed` cycles satisfy the target. Never true for `Infinite`.
    #[inline]
    pub fn is_reached(&self, completed: u32) -> bool {
        match self {
            Self::Finite(n) => completed >= n.get(),
            Self::Infinite => false,
        }
    }
}

impl Default for LoopCount {
    fn default() -> Self {
        Self::ONCE
    }
}

impl From<i64> for LoopCount {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<LoopCount> for i64 {
    fn from(loops: LoopCount) -> Self {
        loops.to_raw()
    }
}

/// Configuration for a single tween.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Seconds per full cycle; must be finite and > 0.
    pub duration: f64,
    /// Cycles to play; `0` in JSON means infinite.
    pub loops: LoopCount,
    /// Play odd-indexed cycles mirrored.
    pub pingpong: bool,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            loops: LoopCount::ONCE,
            pingpong: false,
        }
    }
}

impl TweenConfig {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Raw loop count, `0` for infinite.
    pub fn with_loops(mut self, loops: i64) -> Self {
        self.loops = LoopCount::from_raw(loops);
        self
    }

    pub fn with_pingpong(mut self, pingpong: bool) -> Self {
        self.pingpong = pingpong;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(TweenError::invalid(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON object such as
    /// `{ "duration": 2.0, "loops": 0, "pingpong": true }`. Missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: TweenConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
