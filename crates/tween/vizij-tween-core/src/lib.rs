//! Vizij Tween Core (engine-agnostic)
//!
//! A frame-driven tween state machine plus the easing catalog it samples.
//! The host supplies a per-frame time delta; the tween tracks progression,
//! loop counting, ping-pong mirroring, pause and direction, fires cycle and
//! completion callbacks, and returns the eased scalar for the frame. Mapping
//! that scalar onto typed properties (positions, colors, ...) is left to the
//! caller.

pub mod config;
pub mod easing;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod tween;

// Re-exports for consumers (adapters)
pub use config::{LoopCount, TweenConfig};
pub use easing::{CurveSelector, EasingCurve, EasingFamily, EasingLibrary, EasingVariant};
pub use error::TweenError;
pub use inputs::TweenCommand;
pub use outputs::{Frame, TweenEvent};
pub use tween::{AdvanceOptions, Direction, Tween};

/// Tween result type
pub type Result<T> = core::result::Result<T, TweenError>;
