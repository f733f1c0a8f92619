//! Deck state: track list, rotation and the cached sensor field

use serde::{Deserialize, Serialize};

use super::sensor::{Sensor, VisualMode, generate_seeded};
use crate::consts::TRACK_FLIP_DEG;
use crate::error::{Result, WheelError};

/// Which side of the mixer a deck sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckId {
    A,
    B,
}

impl DeckId {
    pub const BOTH: [DeckId; 2] = [DeckId::A, DeckId::B];

    pub fn name(&self) -> &'static str {
        match self {
            DeckId::A => "DECK A",
            DeckId::B => "DECK B",
        }
    }
}

/// Display strings for one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackItem {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    #[serde(alias = "sub")]
    pub status: String,
}

impl TrackItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Ring texts in layout order
    pub fn rings(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.status]
    }
}

/// One jog wheel's state
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub id: DeckId,
    tracks: Vec<TrackItem>,
    /// Index of the loaded track, always within `tracks`
    index: usize,
    /// Displayed rotation (degrees, unbounded)
    pub rotation: f32,
    /// Rotation the display is easing toward (degrees, unbounded)
    pub target_rotation: f32,
    /// Adds jitter to the rotation every frame
    pub looping: bool,
    pub mode: VisualMode,
    pub sensors: Vec<Sensor>,
    /// Mode the current sensor field was generated for
    pub last_generated_mode: Option<VisualMode>,
}

impl Deck {
    pub fn new(id: DeckId, tracks: Vec<TrackItem>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(WheelError::EmptyLibrary);
        }
        Ok(Self {
            id,
            tracks,
            index: 0,
            rotation: 0.0,
            target_rotation: 0.0,
            looping: false,
            mode: VisualMode::default(),
            sensors: Vec::new(),
            last_generated_mode: None,
        })
    }

    pub fn tracks(&self) -> &[TrackItem] {
        &self.tracks
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_track(&self) -> &TrackItem {
        &self.tracks[self.index]
    }

    /// Load a track and kick the wheel a half turn
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(WheelError::TrackOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.index = index;
        self.target_rotation += TRACK_FLIP_DEG;
        Ok(())
    }

    /// Drop the sensor field so the next frame regenerates it
    pub fn invalidate_sensors(&mut self) {
        self.sensors.clear();
    }

    /// Whether the sensor field must be regenerated before use
    pub fn needs_sensors(&self) -> bool {
        self.sensors.is_empty() || self.last_generated_mode != Some(self.mode)
    }

    /// Regenerate the sensor field if it is empty or stale. Returns true when regenerated.
    pub fn ensure_sensors(&mut self, s: f32, scatter_seed: u64) -> Result<bool> {
        if !self.needs_sensors() {
            return Ok(false);
        }
        self.sensors = generate_seeded(self.mode, s, scatter_seed)?;
        self.last_generated_mode = Some(self.mode);
        log::debug!(
            "{}: generated {} {} sensors (s = {:.1})",
            self.id.name(),
            self.sensors.len(),
            self.mode.as_str(),
            s
        );
        Ok(true)
    }

    /// Animator phase 1: ease every sensor toward its target and reset the target to base
    pub fn reset_sensor_targets(&mut self) {
        for sensor in &mut self.sensors {
            sensor.ease_and_reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::sensor::SCATTER_SEED;

    fn deck() -> Deck {
        Deck::new(
            DeckId::A,
            vec![
                TrackItem::new("ONE", "FIRST", "STATUS // "),
                TrackItem::new("TWO", "SECOND", "STATUS // "),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_library_rejected() {
        assert!(matches!(Deck::new(DeckId::B, Vec::new()), Err(WheelError::EmptyLibrary)));
    }

    #[test]
    fn test_select_track_flips() {
        let mut deck = deck();
        deck.select_track(1).unwrap();
        assert_eq!(deck.index(), 1);
        assert_eq!(deck.target_rotation, 180.0);
        assert_eq!(deck.current_track().title, "TWO");
    }

    #[test]
    fn test_select_track_out_of_range_ignored() {
        let mut deck = deck();
        let err = deck.select_track(2).unwrap_err();
        assert!(matches!(err, WheelError::TrackOutOfRange { index: 2, len: 2 }));
        assert_eq!(deck.index(), 0);
        assert_eq!(deck.target_rotation, 0.0);
    }

    #[test]
    fn test_ensure_sensors_caches_until_mode_changes() {
        let mut deck = deck();
        assert!(deck.ensure_sensors(100.0, SCATTER_SEED).unwrap());
        assert_eq!(deck.sensors.len(), 12);

        deck.sensors[0].current = 5.0;
        assert!(!deck.ensure_sensors(100.0, SCATTER_SEED).unwrap());
        assert_eq!(deck.sensors[0].current, 5.0);

        deck.mode = VisualMode::Ring;
        assert!(deck.ensure_sensors(100.0, SCATTER_SEED).unwrap());
        assert_eq!(deck.sensors.len(), 36);
        assert_eq!(deck.sensors[0].current, deck.sensors[0].base);
        assert_eq!(deck.last_generated_mode, Some(VisualMode::Ring));
    }

    #[test]
    fn test_invalidate_forces_regeneration() {
        let mut deck = deck();
        deck.ensure_sensors(100.0, SCATTER_SEED).unwrap();
        deck.invalidate_sensors();
        assert!(deck.needs_sensors());
        assert!(deck.ensure_sensors(200.0, SCATTER_SEED).unwrap());
        assert!((deck.sensors[0].base - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_failed_generation_leaves_field_empty() {
        let mut deck = deck();
        assert!(deck.ensure_sensors(-1.0, SCATTER_SEED).is_err());
        assert!(deck.sensors.is_empty());
        assert_eq!(deck.last_generated_mode, None);
    }

    #[test]
    fn test_track_item_accepts_short_field_names() {
        let item: TrackItem =
            serde_json::from_str(r#"{"title": "T", "desc": "D", "sub": "S"}"#).unwrap();
        assert_eq!(item.rings(), ["T", "D", "S"]);
    }
}
