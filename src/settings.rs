//! Session settings
//!
//! Behavioural knobs that are not part of the wheel geometry. Geometry lives in
//! [`crate::consts`] so that every distance stays proportional to `s`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LOOP_JITTER_DEG;
use crate::error::{Result, WheelError};

/// Session settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the session RNG (loop jitter)
    pub seed: u64,
    /// Seed the Scatter layout reseeds with on every generation
    pub scatter_seed: u64,

    // === Rotation ===
    /// Maximum jitter (degrees) added per frame while a deck is looping
    pub loop_jitter_deg: f32,
    /// Rotation gap (degrees) above which the wheel clicks
    pub click_speed_threshold: f32,
    /// Click at most every N frames
    pub click_frame_interval: u64,

    // === Input ===
    /// Scroll delta to rotation degrees
    pub scroll_speed: f32,
    /// Horizontal scroll delta to crossfader travel
    pub crossfader_step: f32,
    /// Horizontal scroll below this magnitude leaves the crossfader alone
    pub crossfader_deadzone: f32,
    /// Crossfader noise cue at most every N frames
    pub noise_frame_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            scatter_seed: 999,

            loop_jitter_deg: 2.0,
            click_speed_threshold: 5.0,
            click_frame_interval: 6,

            scroll_speed: 0.5,
            crossfader_step: 0.001,
            crossfader_deadzone: 5.0,
            noise_frame_interval: 5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject knobs that would break the frame loop
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("loop_jitter_deg", self.loop_jitter_deg, 0.0..=MAX_LOOP_JITTER_DEG),
            ("click_speed_threshold", self.click_speed_threshold, 0.0..=f32::MAX),
            ("scroll_speed", self.scroll_speed, -f32::MAX..=f32::MAX),
            ("crossfader_step", self.crossfader_step, -f32::MAX..=f32::MAX),
            ("crossfader_deadzone", self.crossfader_deadzone, 0.0..=f32::MAX),
        ];
        for (name, value, range) in checks {
            if !range.contains(&value) {
                return Err(WheelError::InvalidSetting { name, value });
            }
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
