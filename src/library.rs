//! Track lists for the two decks

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WheelError};
use crate::wheel::TrackItem;

/// Track lists for both decks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLibrary {
    pub deck_a: Vec<TrackItem>,
    pub deck_b: Vec<TrackItem>,
}

fn tracks(items: &[(&str, &str, &str)]) -> Vec<TrackItem> {
    items
        .iter()
        .map(|&(title, desc, sub)| TrackItem::new(title, desc, sub))
        .collect()
}

impl Default for TrackLibrary {
    fn default() -> Self {
        Self {
            deck_a: tracks(&[
                ("TIME MEMORY", "INTERACTING WITH THE FLOW", "SYSTEM PROCESSING DATA STREAM A // "),
                ("PAST FUTURE", "RECONSTRUCTING FRAGMENTS", "BUFFERING SEQUENCE INITIATED // "),
                ("CORE LOGIC", "SEARCHING FOR PATTERNS", "ALGORITHM OPTIMIZATION RUNNING // "),
                ("DEEP DIVE", "NAVIGATING THE LAYERS", "DEPTH ANALYSIS COMPLETE // "),
                ("VOID SPACE", "FILLING THE EMPTY VOID", "NULL POINTER EXCEPTION ERROR // "),
            ]),
            deck_b: tracks(&[
                ("SOUND WAVE", "VISUALIZING THE AUDIO", "FREQUENCY MODULATION SYNC // "),
                ("ECHO LOOP", "REPEATING THE SIGNALS", "FEEDBACK LOOP DETECTED // "),
                ("NOISE GATE", "FILTERING INTERFERENCE", "THRESHOLD LIMIT REACHED // "),
                ("PULSE RATE", "SYNCHRONIZING BEATS", "BPM MATCHING SEQUENCE // "),
                ("FLAT LINE", "TERMINATING PROCESS", "CONNECTION TERMINATED // "),
            ]),
        }
    }
}

impl TrackLibrary {
    /// Parse a library from JSON. Both decks need at least one track.
    pub fn from_json(json: &str) -> Result<Self> {
        let library: Self = serde_json::from_str(json)?;
        if library.deck_a.is_empty() || library.deck_b.is_empty() {
            return Err(WheelError::EmptyLibrary);
        }
        Ok(library)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let library = Self::from_json(&json)?;
        log::info!(
            "Loaded track library from {} ({} + {} tracks)",
            path.as_ref().display(),
            library.deck_a.len(),
            library.deck_b.len()
        );
        Ok(library)
    }
}
