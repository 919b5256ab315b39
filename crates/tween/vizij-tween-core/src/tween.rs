//! Tween: per-instance timer and cycle state machine.
//!
//! A tween owns one scalar time position that moves between `0` and
//! `duration`. The host calls [`Tween::advance`] (or [`Tween::step`]) once per
//! frame with the elapsed seconds; the tween clamps its position, handles
//! cycle boundaries (loop counting, re-seating, ping-pong mirroring) and
//! returns the eased output for the frame.
//!
//! Per-frame order:
//! 1. move `elapsed` by `direction * dt` unless paused, clamped to `[0, duration]`
//! 2. detect a boundary (`1` going forward, `0` going backward)
//! 3. on a boundary: count the cycle, re-seat or freeze `elapsed`, raise events
//! 4. mirror the phase on odd cycles when ping-ponging, then apply the curve

use serde::{Deserialize, Serialize};

use crate::config::{LoopCount, TweenConfig};
use crate::easing::EasingCurve;
use crate::inputs::TweenCommand;
use crate::outputs::{Frame, TweenEvent};
use crate::Result;

/// Direction of time advancement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Per-call options for [`Tween::advance`].
#[derive(Default)]
pub struct AdvanceOptions<'a> {
    on_cycle_complete: Option<&'a mut dyn FnMut()>,
    on_all_cycles_complete: Option<&'a mut dyn FnMut()>,
    curve: EasingCurve,
}

impl<'a> AdvanceOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a cycle boundary is crossed (never for single-shot tweens).
    pub fn on_cycle_complete(mut self, f: &'a mut dyn FnMut()) -> Self {
        self.on_cycle_complete = Some(f);
        self
    }

    /// Called once when the loop target is reached.
    pub fn on_all_cycles_complete(mut self, f: &'a mut dyn FnMut()) -> Self {
        self.on_all_cycles_complete = Some(f);
        self
    }

    /// Curve applied to the phase; defaults to `Linear.InOut`.
    pub fn curve(mut self, curve: EasingCurve) -> Self {
        self.curve = curve;
        self
    }
}

/// Frame-driven tween.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    elapsed: f64,
    direction: Direction,
    cycle_index: u32,
    loops: LoopCount,
    duration: f64,
    pingpong: bool,
    paused: bool,
    cycle_callback_fired: bool,
    completion_callback_fired: bool,
}

impl Default for Tween {
    /// One-second, single-shot, no ping-pong.
    fn default() -> Self {
        Self::from_valid(TweenConfig::default())
    }
}

impl Tween {
    /// Build a tween from a validated config.
    pub fn new(cfg: TweenConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::from_valid(cfg))
    }

    /// Parse a JSON config and build a tween.
    pub fn from_json(s: &str) -> Result<Self> {
        TweenConfig::from_json(s).map(Self::from_valid)
    }

    fn from_valid(cfg: TweenConfig) -> Self {
        Self {
            elapsed: 0.0,
            direction: Direction::Forward,
            cycle_index: 0,
            loops: cfg.loops,
            duration: cfg.duration,
            pingpong: cfg.pingpong,
            paused: false,
            cycle_callback_fired: false,
            completion_callback_fired: false,
        }
    }

    /// Configuration this tween was built with.
    pub fn config(&self) -> TweenConfig {
        TweenConfig {
            duration: self.duration,
            loops: self.loops,
            pingpong: self.pingpong,
        }
    }

    /// Normalized position within the current cycle, always in `[0, 1]`.
    #[inline]
    pub fn progression(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Completed cycles.
    #[inline]
    pub fn cycle_index(&self) -> u32 {
        self.cycle_index
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.direction == Direction::Reverse
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Seconds along the current cycle, in `[0, duration]`.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn loops(&self) -> LoopCount {
        self.loops
    }

    #[inline]
    pub fn pingpong(&self) -> bool {
        self.pingpong
    }

    /// Loop target reached. Always false for infinite tweens.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.loops.is_reached(self.cycle_index)
    }

    /// Advance by `dt` seconds, fire any callbacks and return the eased value.
    ///
    /// Callbacks run synchronously, in the order cycle then completion, before
    /// this returns.
    pub fn advance(&mut self, dt: f64, options: AdvanceOptions<'_>) -> f64 {
        let AdvanceOptions {
            mut on_cycle_complete,
            mut on_all_cycles_complete,
            curve,
        } = options;
        let frame = self.step(dt, curve);
        for event in &frame.events {
            match event {
                TweenEvent::CycleCompleted { .. } => {
                    if let Some(cb) = on_cycle_complete.as_deref_mut() {
                        cb();
                    }
                }
                TweenEvent::AllCyclesCompleted { .. } => {
                    if let Some(cb) = on_all_cycles_complete.as_deref_mut() {
                        cb();
                    }
                }
            }
        }
        frame.value
    }

    /// Callback-free form of [`Tween::advance`]: same state transitions, with
    /// the raised events returned in the frame.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn step(&mut self, dt: f64, curve: EasingCurve) -> Frame {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        if !self.paused {
            self.elapsed = (self.elapsed + self.direction.sign() * dt).clamp(0.0, self.duration);
        }

        // A paused tween holds its position, boundary included.
        let progression = self.progression();
        let crossed = !self.paused
            && match self.direction {
                Direction::Forward => progression >= 1.0,
                Direction::Reverse => progression <= 0.0,
            };

        let mut events = Vec::new();
        if crossed {
            self.cross_boundary(&mut events);
        }

        // Re-seating may have moved elapsed; progression stays derived from it.
        let progression = self.progression();
        let phase = if self.pingpong && self.cycle_index % 2 == 1 {
            1.0 - progression
        } else {
            progression
        };

        Frame {
            value: curve.apply(phase),
            progression,
            phase,
            cycle_index: self.cycle_index,
            events,
        }
    }

    fn cross_boundary(&mut self, events: &mut Vec<TweenEvent>) {
        if !self.loops.is_reached(self.cycle_index) {
            self.cycle_index = self.cycle_index.saturating_add(1);
            // A fresh crossing re-arms the cycle guard.
            self.cycle_callback_fired = false;
            log::debug!(
                "tween cycle {} completed ({:?})",
                self.cycle_index,
                self.direction
            );
        }

        let forward = self.direction == Direction::Forward;
        let reached = self.loops.is_reached(self.cycle_index);
        // Keep moving in the same direction next frame, unless this was the last cycle.
        self.elapsed = match (reached, forward) {
            (true, true) | (false, false) => self.duration,
            (true, false) | (false, true) => 0.0,
        };

        // Single-shot tweens only report completion.
        if !self.loops.is_single_shot() && !self.cycle_callback_fired {
            self.cycle_callback_fired = true;
            events.push(TweenEvent::CycleCompleted {
                cycle: self.cycle_index,
            });
        }

        if reached && !self.completion_callback_fired {
            self.completion_callback_fired = true;
            log::debug!("tween completed after {} cycles", self.cycle_index);
            events.push(TweenEvent::AllCyclesCompleted {
                cycles: self.cycle_index,
            });
        }
    }

    /// Toggle pause. While paused, `advance` never moves `elapsed` and no
    /// boundary is crossed.
    ///
    /// Unlike [`Tween::reverse`], this leaves the callback guards armed as they are.
    pub fn pause_resume(&mut self) {
        self.paused = !self.paused;
        log::trace!("tween paused={}", self.paused);
    }

    /// Rewind to the start and re-arm callbacks. Configuration is kept.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.direction = Direction::Forward;
        self.cycle_index = 0;
        self.paused = false;
        self.cycle_callback_fired = false;
        self.completion_callback_fired = false;
        log::trace!("tween reset");
    }

    /// Flip direction, continuing from the current progression.
    ///
    /// Direction changes re-arm both callbacks, so a tween frozen at a boundary
    /// reports again once it reaches the opposite one.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
        self.cycle_callback_fired = false;
        self.completion_callback_fired = false;
        log::trace!("tween reversed, now {:?}", self.direction);
    }

    pub fn apply(&mut self, cmd: TweenCommand) {
        match cmd {
            TweenCommand::PauseResume => self.pause_resume(),
            TweenCommand::Reset => self.reset(),
            TweenCommand::Reverse => self.reverse(),
        }
    }

    pub fn apply_all(&mut self, cmds: impl IntoIterator<Item = TweenCommand>) {
        for cmd in cmds {
            self.apply(cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(duration: f64, loops: i64, pingpong: bool) -> Tween {
        Tween::new(
            TweenConfig::default()
                .with_duration(duration)
                .with_loops(loops)
                .with_pingpong(pingpong),
        )
        .unwrap()
    }

    #[test]
    fn default_matches_default_config() {
        let t = Tween::default();
        assert_eq!(t.config(), TweenConfig::default());
        assert_eq!(t.direction(), Direction::Forward);
        assert_eq!(t.cycle_index(), 0);
        assert!(!t.is_paused());
    }

    #[test]
    fn frozen_boundary_keeps_guards_set() {
        let mut t = tween(1.0, 2, false);
        let curve = EasingCurve::default();
        t.step(1.0, curve);
        let last = t.step(1.0, curve);
        assert_eq!(last.events.len(), 2);
        assert!(t.cycle_callback_fired);
        assert!(t.completion_callback_fired);

        let again = t.step(1.0, curve);
        assert!(again.events.is_empty());
        assert_eq!(t.elapsed(), 1.0);
    }

    #[test]
    fn pause_resume_does_not_touch_guards() {
        let mut t = tween(1.0, 1, false);
        t.step(1.0, EasingCurve::default());
        assert!(t.completion_callback_fired);
        t.pause_resume();
        t.pause_resume();
        assert!(t.completion_callback_fired);
    }

    #[test]
    fn reverse_rearms_guards() {
        let mut t = tween(1.0, 1, false);
        t.step(1.0, EasingCurve::default());
        t.reverse();
        assert!(!t.cycle_callback_fired);
        assert!(!t.completion_callback_fired);
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut t = tween(1.0, 1, false);
        t.step(0.25, EasingCurve::default());
        t.step(f64::NAN, EasingCurve::default());
        t.step(-5.0, EasingCurve::default());
        assert_eq!(t.elapsed(), 0.25);
    }
}
