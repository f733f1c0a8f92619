//! Input commands for the session
//!
//! The host turns its own key, wheel and resize events into [`Command`]s.

use serde::{Deserialize, Serialize};

use crate::wheel::DeckId;

/// One input event, applied between frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Window resized; recomputes the layout and clears both sensor fields
    Resize { width: f32, height: f32 },
    /// Set the active deck's visual mode (1-6)
    SelectMode(u8),
    /// Mouse wheel: vertical spins the decks, horizontal moves the crossfader
    Scroll { delta_x: f32, delta_y: f32 },
    /// Raw rotation deltas (degrees), scaled by crossfader influence
    Drive { delta_a: f32, delta_b: f32 },
    /// Set the crossfader position directly
    SetCrossfader(f32),
    /// Load a track on a deck
    SelectTrack { deck: DeckId, index: usize },
    /// Toggle loop jitter on a deck
    SetLooping { deck: DeckId, looping: bool },
}

/// Track keys for deck A
pub const DECK_A_KEYS: [char; 4] = ['a', 's', 'd', 'f'];
/// Track keys for deck B
pub const DECK_B_KEYS: [char; 4] = ['h', 'j', 'k', 'l'];

/// Map a pressed key to a command (case-insensitive)
pub fn command_for_key(key: char) -> Option<Command> {
    let key = key.to_ascii_lowercase();

    if let Some(index) = DECK_A_KEYS.iter().position(|&k| k == key) {
        return Some(Command::SelectTrack { deck: DeckId::A, index });
    }
    if let Some(index) = DECK_B_KEYS.iter().position(|&k| k == key) {
        return Some(Command::SelectTrack { deck: DeckId::B, index });
    }

    match key.to_digit(10) {
        Some(mode @ 1..=6) => Some(Command::SelectMode(mode as u8)),
        _ => None,
    }
}
