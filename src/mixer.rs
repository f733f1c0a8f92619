//! Crossfader mixing between the two decks
//!
//! The crossfader decides how strongly scroll input drives each wheel and which
//! deck receives mode changes.

use serde::{Deserialize, Serialize};

use crate::map_clamped;
use crate::wheel::DeckId;

/// Crossfader below this selects deck A
pub const ACTIVE_A_BELOW: f32 = 0.45;
/// Crossfader above this selects deck B
pub const ACTIVE_B_ABOVE: f32 = 0.55;

/// Scroll influence on deck A (1 at the far left, 0 from 0.6 rightward)
pub fn influence_a(crossfader: f32) -> f32 {
    map_clamped(crossfader, 0.6, 0.0, 0.0, 1.0)
}

/// Scroll influence on deck B (0 up to 0.4, 1 at the far right)
pub fn influence_b(crossfader: f32) -> f32 {
    map_clamped(crossfader, 0.4, 1.0, 0.0, 1.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mixer {
    /// Crossfader position in [0, 1]
    crossfader: f32,
    active: DeckId,
}

impl Default for Mixer {
    fn default() -> Self {
        Self {
            crossfader: 0.5,
            active: DeckId::A,
        }
    }
}

impl Mixer {
    pub fn crossfader(&self) -> f32 {
        self.crossfader
    }

    pub fn set_crossfader(&mut self, value: f32) {
        if value.is_finite() {
            self.crossfader = value.clamp(0.0, 1.0);
        }
    }

    /// Move the crossfader by `delta`, clamped to [0, 1]
    pub fn nudge(&mut self, delta: f32) {
        self.set_crossfader(self.crossfader + delta);
    }

    /// Deck that receives mode changes
    pub fn active(&self) -> DeckId {
        self.active
    }

    /// Re-derive the active deck. Inside the center band the previous choice sticks.
    pub fn update_active(&mut self) -> DeckId {
        if self.crossfader < ACTIVE_A_BELOW {
            self.active = DeckId::A;
        } else if self.crossfader > ACTIVE_B_ABOVE {
            self.active = DeckId::B;
        }
        self.active
    }

    pub fn influence(&self, deck: DeckId) -> f32 {
        match deck {
            DeckId::A => influence_a(self.crossfader),
            DeckId::B => influence_b(self.crossfader),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_influence_curves() {
        assert_eq!(influence_a(0.0), 1.0);
        assert_eq!(influence_a(0.6), 0.0);
        assert_eq!(influence_a(1.0), 0.0);
        assert!((influence_a(0.5) - 1.0 / 6.0).abs() < 1e-5);

        assert_eq!(influence_b(0.0), 0.0);
        assert_eq!(influence_b(0.4), 0.0);
        assert_eq!(influence_b(1.0), 1.0);
        assert!((influence_b(0.5) - 1.0 / 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_drives_both_decks() {
        let mixer = Mixer::default();
        assert!(mixer.influence(DeckId::A) > 0.0);
        assert!(mixer.influence(DeckId::B) > 0.0);
    }

    #[test]
    fn test_active_deck_hysteresis() {
        let mut mixer = Mixer::default();
        assert_eq!(mixer.update_active(), DeckId::A);

        mixer.set_crossfader(0.8);
        assert_eq!(mixer.update_active(), DeckId::B);

        // Center band keeps B
        mixer.set_crossfader(0.5);
        assert_eq!(mixer.update_active(), DeckId::B);

        mixer.set_crossfader(0.2);
        assert_eq!(mixer.update_active(), DeckId::A);
    }

    #[test]
    fn test_crossfader_clamps() {
        let mut mixer = Mixer::default();
        mixer.nudge(2.0);
        assert_eq!(mixer.crossfader(), 1.0);
        mixer.nudge(-5.0);
        assert_eq!(mixer.crossfader(), 0.0);
        mixer.set_crossfader(f32::NAN);
        assert_eq!(mixer.crossfader(), 0.0);
    }
}
