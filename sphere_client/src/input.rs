//! Input handling.
//!
//! In a real client this would integrate with windowing, raw keyboard
//! sampling, and key bindings. This scaffold focuses on producing
//! deterministic per-tick `Intent` values: a scripted walk pattern that
//! exercises every direction.

use sphere_core::intent::{HeldKeys, Intent};

/// Scripted key state for a given tick.
///
/// Walks forward while slowly sweeping the view left, then right, with
/// short idle gaps, which is enough to exercise rotation, re-sorting,
/// background pan, and touch checks.
pub fn scripted_keys(tick: u64) -> HeldKeys {
    let phase = tick % 400;
    match phase {
        0..=149 => HeldKeys::FORWARD | HeldKeys::TURN_LEFT,
        150..=299 => HeldKeys::FORWARD | HeldKeys::TURN_RIGHT,
        300..=359 => HeldKeys::BACK,
        _ => HeldKeys::empty(),
    }
}

/// Turns sampled key state into the per-tick intent.
pub fn build_intent(keys: HeldKeys) -> Intent {
    keys.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphere_core::intent::{Turn, Walk};

    #[test]
    fn script_covers_all_directions() {
        let intents: Vec<Intent> = (0..400u64).map(|t| build_intent(scripted_keys(t))).collect();
        assert!(intents.iter().any(|i| i.turn == Some(Turn::Left)));
        assert!(intents.iter().any(|i| i.turn == Some(Turn::Right)));
        assert!(intents.iter().any(|i| i.walk == Some(Walk::Forward)));
        assert!(intents.iter().any(|i| i.walk == Some(Walk::Back)));
        assert!(intents.iter().any(|i| *i == Intent::IDLE));
    }
}
