//! Output contracts from a tween step.
//!
//! A `Frame` carries the eased value for this tick plus the semantic events
//! raised while crossing a cycle boundary. Hosts that prefer callbacks use
//! `Tween::advance`, which fires them from the same events.

use serde::{Deserialize, Serialize};

/// Discrete signals raised during a step, in firing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    /// A cycle boundary was crossed; `cycle` is the completed-cycle count.
    /// Not raised for single-shot tweens.
    CycleCompleted { cycle: u32 },
    /// The configured loop target was reached.
    AllCyclesCompleted { cycles: u32 },
}

/// Result of one `Tween::step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Eased output.
    pub value: f64,
    /// Normalized position in the current cycle after this step.
    pub progression: f64,
    /// Phase fed to the curve (mirrored on odd ping-pong cycles).
    pub phase: f64,
    pub cycle_index: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TweenEvent>,
}

impl Frame {
    #[inline]
    pub fn cycle_completed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TweenEvent::CycleCompleted { .. }))
    }

    #[inline]
    pub fn all_cycles_completed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TweenEvent::AllCyclesCompleted { .. }))
    }
}
