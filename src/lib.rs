//! Kinetic Decks - twin rotating jog wheels with reactive sensor fields
//!
//! Core modules:
//! - `wheel`: Deterministic jog wheel core (sensors, rotation, radial text, collisions)
//! - `scale`: Panel layout and the wheel reference scale
//! - `mixer`: Crossfader influence and active deck selection
//! - `session`: Frame driver owning both decks
//! - `input`: Commands and the default key map
//! - `renderer`: CPU tessellation of a wheel description
//! - `library`: Built-in and JSON track lists

pub mod error;
pub mod input;
pub mod library;
pub mod mixer;
pub mod renderer;
pub mod scale;
pub mod session;
pub mod settings;
pub mod wheel;

pub use error::{Result, WheelError};
pub use input::Command;
pub use session::{Cue, FrameOutput, Session};
pub use settings::Settings;

use glam::Vec2;

/// Wheel geometry constants, all expressed as fractions of the scale reference `s`
pub mod consts {
    /// Wheel reference scale as a fraction of the smaller deck panel side
    pub const SCALE_FACTOR: f32 = 0.8;

    /// Text ring / sensor ring radii
    pub const RING_RADII: [f32; 3] = [0.18, 0.28, 0.38];

    /// Sensor resting size
    pub const SENSOR_BASE: f32 = 0.02;
    /// Sensor size while swept by text
    pub const SENSOR_BULGE: f32 = 0.07;
    /// Sensor center dot
    pub const SENSOR_DOT: f32 = 0.005;
    /// Character-to-sensor distance that counts as a hit
    pub const HIT_DISTANCE: f32 = 0.05;

    /// Arc length between neighbouring characters on a ring
    pub const ARC_SPACING: f32 = 0.05;
    /// Glyph size for all three rings
    pub const FONT_SIZE: f32 = 0.045;
    /// Center decor ring diameter
    pub const HUB_DIAMETER: f32 = 0.1;

    /// Per-frame smoothing factors
    pub const ROTATION_SMOOTHING: f32 = 0.1;
    pub const SENSOR_SMOOTHING: f32 = 0.2;

    /// Upper bound for per-frame loop jitter (degrees)
    pub const MAX_LOOP_JITTER_DEG: f32 = 180.0;

    /// Half-turn cue applied on track change (degrees)
    pub const TRACK_FLIP_DEG: f32 = 180.0;

    /// Deck panel layout, as fractions of the window
    pub const DECK_PANEL_WIDTH: f32 = 0.35;
    pub const DECK_PANEL_HEIGHT: f32 = 0.6;
    pub const DECK_PANEL_Y: f32 = 0.35;
    pub const DECK_A_X: f32 = 0.25;
    pub const DECK_B_X: f32 = 0.75;
    /// Wheel offset below the deck panel center, as a fraction of panel height
    pub const WHEEL_OFFSET_Y: f32 = 0.15;

    /// MIDI base for the mode-change tone
    pub const MODE_TONE_BASE: u8 = 80;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamped to the output range.
/// `in_lo` may be greater than `in_hi` for a falling ramp.
pub fn map_clamped(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let t = (value - in_lo) / (in_hi - in_lo);
    let mapped = out_lo + (out_hi - out_lo) * t;
    if out_lo < out_hi {
        mapped.clamp(out_lo, out_hi)
    } else {
        mapped.clamp(out_hi, out_lo)
    }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
