//! Frame driver
//!
//! Owns both decks and the mixer and advances them one frame at a time in a
//! fixed order:
//! 1. rotation smoothing and sensor easing/reset for both decks
//! 2. active deck from the crossfader
//! 3. per deck: sensor field check, ring layout and collision marking
//!
//! Commands are applied between frames. Audio cues they raise are handed out
//! with the next frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MODE_TONE_BASE;
use crate::error::{Result, WheelError};
use crate::input::Command;
use crate::library::TrackLibrary;
use crate::mixer::Mixer;
use crate::scale::PanelLayout;
use crate::settings::Settings;
use crate::wheel::{
    Deck, DeckId, RotationParams, VisualMode, WheelFrame, advance_rotation, compose_wheel,
};

/// Sound cue for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Short click (fast spin or track change)
    Click,
    /// Mode change tone
    Tone { midi: u8 },
    /// Crossfader scrub noise
    Noise,
}

/// Everything the host needs to draw and sound one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    pub frame: u64,
    pub active: DeckId,
    pub crossfader: f32,
    /// `None` when the wheel could not be built this frame
    pub deck_a: Option<WheelFrame>,
    pub deck_b: Option<WheelFrame>,
    pub cues: Vec<Cue>,
}

impl FrameOutput {
    pub fn wheel(&self, deck: DeckId) -> Option<&WheelFrame> {
        match deck {
            DeckId::A => self.deck_a.as_ref(),
            DeckId::B => self.deck_b.as_ref(),
        }
    }
}

/// Two decks, a mixer and the frame counter
pub struct Session {
    settings: Settings,
    deck_a: Deck,
    deck_b: Deck,
    mixer: Mixer,
    window: Vec2,
    frame: u64,
    rng: Pcg32,
    pending_cues: Vec<Cue>,
    /// Avoids logging the same bad window every frame
    scale_warned: bool,
}

impl Session {
    pub fn new(library: TrackLibrary, settings: Settings, width: f32, height: f32) -> Result<Self> {
        settings.validate()?;
        log::info!("Session starting ({}x{}, seed {})", width, height, settings.seed);
        Ok(Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            deck_a: Deck::new(DeckId::A, library.deck_a)?,
            deck_b: Deck::new(DeckId::B, library.deck_b)?,
            mixer: Mixer::default(),
            window: Vec2::new(width, height),
            frame: 0,
            pending_cues: Vec::new(),
            scale_warned: false,
        })
    }

    pub fn deck(&self, id: DeckId) -> &Deck {
        match id {
            DeckId::A => &self.deck_a,
            DeckId::B => &self.deck_b,
        }
    }

    pub fn deck_mut(&mut self, id: DeckId) -> &mut Deck {
        match id {
            DeckId::A => &mut self.deck_a,
            DeckId::B => &mut self.deck_b,
        }
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Current layout, or the reason the window cannot hold a wheel
    pub fn layout(&self) -> Result<PanelLayout> {
        PanelLayout::from_window(self.window.x, self.window.y)
    }

    /// Apply a command. Invalid commands are logged and ignored.
    pub fn apply(&mut self, command: Command) {
        if let Err(e) = self.try_apply(command) {
            log::debug!("Ignoring {:?}: {}", command, e);
        }
    }

    /// Apply a command, reporting why it was rejected
    pub fn try_apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Resize { width, height } => self.resize(width, height),
            Command::SelectMode(mode) => self.select_mode(mode)?,
            Command::Scroll { delta_x, delta_y } => self.scroll(delta_x, delta_y),
            Command::Drive { delta_a, delta_b } => self.drive(delta_a, delta_b),
            Command::SetCrossfader(value) => self.mixer.set_crossfader(value),
            Command::SelectTrack { deck, index } => {
                self.deck_mut(deck).select_track(index)?;
                self.pending_cues.push(Cue::Click);
            }
            Command::SetLooping { deck, looping } => self.deck_mut(deck).looping = looping,
        }
        Ok(())
    }

    /// New window size: both sensor fields are rebuilt at the new scale next frame
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("Resize to {}x{}", width, height);
        self.window = Vec2::new(width, height);
        self.scale_warned = false;
        self.invalidate_sensors();
    }

    /// Set the active deck's mode and force both fields to regenerate
    pub fn select_mode(&mut self, mode: u8) -> Result<()> {
        let mode = VisualMode::try_from(mode)?;
        let active = self.mixer.active();
        log::info!("{} mode -> {} ({})", active.name(), mode.number(), mode.as_str());
        self.deck_mut(active).mode = mode;
        self.invalidate_sensors();
        self.pending_cues.push(Cue::Tone {
            midi: MODE_TONE_BASE + mode.number(),
        });
        Ok(())
    }

    /// Mouse wheel input
    pub fn scroll(&mut self, delta_x: f32, delta_y: f32) {
        let speed = delta_y * self.settings.scroll_speed;
        self.drive(speed, speed);

        if delta_x.abs() > self.settings.crossfader_deadzone {
            self.mixer.nudge(delta_x * self.settings.crossfader_step);
            let interval = self.settings.noise_frame_interval;
            if interval > 0 && self.frame % interval == 0 {
                self.pending_cues.push(Cue::Noise);
            }
        }
    }

    /// Add rotation to each deck's target, weighted by the crossfader
    pub fn drive(&mut self, delta_a: f32, delta_b: f32) {
        for (id, delta) in [(DeckId::A, delta_a), (DeckId::B, delta_b)] {
            let influence = self.mixer.influence(id);
            if influence > 0.0 {
                self.deck_mut(id).target_rotation += delta * influence;
            }
        }
    }

    fn invalidate_sensors(&mut self) {
        self.deck_a.invalidate_sensors();
        self.deck_b.invalidate_sensors();
    }

    /// Advance one frame and describe it
    pub fn frame(&mut self) -> FrameOutput {
        self.frame += 1;
        let mut cues = std::mem::take(&mut self.pending_cues);

        // Phase 1 for both decks before any ring layout
        let params = RotationParams {
            jitter_deg: self.settings.loop_jitter_deg,
            click_speed: self.settings.click_speed_threshold,
            click_interval: self.settings.click_frame_interval,
        };
        for deck in [&mut self.deck_a, &mut self.deck_b] {
            if advance_rotation(deck, &mut self.rng, self.frame, &params) {
                cues.push(Cue::Click);
            }
            deck.reset_sensor_targets();
        }
        let active = self.mixer.update_active();

        // Phase 2: ring layout and collisions
        let (deck_a, deck_b) = match self.layout() {
            Ok(layout) => (
                self.build_wheel(DeckId::A, &layout),
                self.build_wheel(DeckId::B, &layout),
            ),
            Err(e) => {
                self.warn_once(&e);
                (None, None)
            }
        };

        FrameOutput {
            frame: self.frame,
            active,
            crossfader: self.mixer.crossfader(),
            deck_a,
            deck_b,
            cues,
        }
    }

    fn build_wheel(&mut self, id: DeckId, layout: &PanelLayout) -> Option<WheelFrame> {
        let center = layout.panel(id).wheel_center;
        let scatter_seed = self.settings.scatter_seed;
        match compose_wheel(self.deck_mut(id), layout.scale, center, scatter_seed) {
            Ok(wheel) => Some(wheel),
            Err(e) => {
                self.warn_once(&e);
                None
            }
        }
    }

    fn warn_once(&mut self, e: &WheelError) {
        if !self.scale_warned {
            log::warn!("Skipping wheel this frame: {}", e);
            self.scale_warned = true;
        }
    }
}
