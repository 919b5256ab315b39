//! Input contracts for driving a tween from data.
//!
//! Adapters that receive control messages (e.g. from a UI or a script bridge)
//! deserialize them into `TweenCommand`s and apply them before stepping.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TweenCommand {
    /// Toggle the paused flag.
    PauseResume,
    /// Rewind to the initial state, keeping configuration.
    Reset,
    /// Flip the direction of time.
    Reverse,
}

impl TweenCommand {
    /// Parse a single command or a JSON array of commands.
    pub fn parse_batch(s: &str) -> crate::Result<Vec<TweenCommand>> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let cmds = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        Ok(cmds)
    }
}
