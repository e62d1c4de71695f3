//! Directional intent.
//!
//! The host samples raw held keys; the core consumes at most one
//! direction per axis per frame. The per-axis enums form the closed set
//! of actions the field controller dispatches over.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Raw held-key set as sampled by the host runtime.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HeldKeys: u8 {
        const TURN_LEFT = 1 << 0;
        const TURN_RIGHT = 1 << 1;
        const FORWARD = 1 << 2;
        const BACK = 1 << 3;
    }
}

/// Horizontal look direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// Walk direction along the view axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Walk {
    Forward,
    Back,
}

/// Per-frame intent: at most one direction per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Intent {
    pub turn: Option<Turn>,
    pub walk: Option<Walk>,
}

impl Intent {
    pub const IDLE: Self = Self {
        turn: None,
        walk: None,
    };

    pub fn forward() -> Self {
        Self {
            turn: None,
            walk: Some(Walk::Forward),
        }
    }

    pub fn turning(turn: Turn) -> Self {
        Self {
            turn: Some(turn),
            walk: None,
        }
    }
}

impl HeldKeys {
    /// Collapses the raw key set to exclusive per-axis intent.
    /// Opposing keys held together cancel out.
    pub fn resolve(self) -> Intent {
        let turn = match (
            self.contains(HeldKeys::TURN_LEFT),
            self.contains(HeldKeys::TURN_RIGHT),
        ) {
            (true, false) => Some(Turn::Left),
            (false, true) => Some(Turn::Right),
            _ => None,
        };
        let walk = match (
            self.contains(HeldKeys::FORWARD),
            self.contains(HeldKeys::BACK),
        ) {
            (true, false) => Some(Walk::Forward),
            (false, true) => Some(Walk::Back),
            _ => None,
        };
        Intent { turn, walk }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let keys = HeldKeys::TURN_LEFT | HeldKeys::TURN_RIGHT | HeldKeys::FORWARD;
        let intent = keys.resolve();
        assert_eq!(intent.turn, None);
        assert_eq!(intent.walk, Some(Walk::Forward));
    }

    #[test]
    fn axes_are_independent() {
        let intent = (HeldKeys::TURN_LEFT | HeldKeys::BACK).resolve();
        assert_eq!(intent.turn, Some(Turn::Left));
        assert_eq!(intent.walk, Some(Walk::Back));
    }

    #[test]
    fn empty_keys_are_idle() {
        assert_eq!(HeldKeys::empty().resolve(), Intent::IDLE);
    }
}
