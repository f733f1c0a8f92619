//! Sensor field generation
//!
//! A sensor field is a pure function of `(mode, s)`. Six layouts are available,
//! all built on the three text ring radii so that text passes over them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, WheelError};
use crate::scale::validate_scale;
use crate::{lerp, polar_to_cartesian};

/// Seed the Scatter layout restarts from on every generation
pub const SCATTER_SEED: u64 = 999;

/// Sensor field layout selector (1-6 on the mixer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VisualMode {
    /// Four spokes on each ring
    #[default]
    Cross = 1,
    /// Evenly spaced rings of 8, 12 and 16
    Ring = 2,
    /// Seeded random points near the rings
    Scatter = 3,
    /// Three rings of 12, each ring offset by 15 degrees
    TripleArc = 4,
    /// Single outward spiral
    Spiral = 5,
    /// Annulus-filtered square lattice
    Grid = 6,
}

impl VisualMode {
    pub const ALL: [VisualMode; 6] = [
        VisualMode::Cross,
        VisualMode::Ring,
        VisualMode::Scatter,
        VisualMode::TripleArc,
        VisualMode::Spiral,
        VisualMode::Grid,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualMode::Cross => "Cross",
            VisualMode::Ring => "Ring",
            VisualMode::Scatter => "Scatter",
            VisualMode::TripleArc => "Triple Arc",
            VisualMode::Spiral => "Spiral",
            VisualMode::Grid => "Grid",
        }
    }
}

impl TryFrom<u8> for VisualMode {
    type Error = WheelError;

    fn try_from(value: u8) -> Result<Self> {
        VisualMode::ALL
            .get((value as usize).wrapping_sub(1))
            .copied()
            .ok_or(WheelError::InvalidMode(value))
    }
}

impl From<VisualMode> for u8 {
    fn from(mode: VisualMode) -> u8 {
        mode.number()
    }
}

/// A point on the wheel whose size reacts to passing text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Position relative to wheel center (not rotated with the text)
    pub pos: Vec2,
    /// Resting size
    pub base: f32,
    /// Displayed size
    pub current: f32,
    /// Size `current` is easing toward
    pub target: f32,
}

impl Sensor {
    pub fn new(pos: Vec2, base: f32) -> Self {
        Self {
            pos,
            base,
            current: base,
            target: base,
        }
    }

    /// Ease the displayed size toward the target, then drop the target back to base
    pub fn ease_and_reset(&mut self) {
        self.current = lerp(self.current, self.target, SENSOR_SMOOTHING);
        self.target = self.base;
    }
}

/// Generate the sensor field for a mode at scale `s`
pub fn generate(mode: VisualMode, s: f32) -> Result<Vec<Sensor>> {
    generate_seeded(mode, s, SCATTER_SEED)
}

/// Generate the sensor field with an explicit Scatter seed
pub fn generate_seeded(mode: VisualMode, s: f32, scatter_seed: u64) -> Result<Vec<Sensor>> {
    let s = validate_scale(s)?;
    let radii = RING_RADII.map(|frac| s * frac);
    let base = s * SENSOR_BASE;
    let at = |r: f32, deg: f32| Sensor::new(polar_to_cartesian(r, deg), base);

    let sensors = match mode {
        VisualMode::Cross => radii
            .iter()
            .flat_map(|&r| [0.0, 90.0, 180.0, 270.0].map(|a| at(r, a)))
            .collect(),
        VisualMode::Ring => radii
            .iter()
            .zip([8u32, 12, 16])
            .flat_map(|(&r, count)| {
                let step = 360.0 / count as f32;
                (0..count).map(move |i| at(r, step * i as f32))
            })
            .collect(),
        VisualMode::Scatter => {
            let mut rng = Pcg32::seed_from_u64(scatter_seed);
            (0..25)
                .map(|_| {
                    // Draw unit values and scale them so the layout scales linearly with s
                    let ring = rng.random_range(0..radii.len());
                    let jitter = rng.random_range(-0.02..0.02);
                    let angle = rng.random_range(0.0..360.0);
                    at(radii[ring] + s * jitter, angle)
                })
                .collect()
        }
        VisualMode::TripleArc => radii
            .iter()
            .enumerate()
            .flat_map(|(k, &r)| (0..12).map(move |i| at(r, 30.0 * i as f32 + 15.0 * k as f32)))
            .collect(),
        VisualMode::Spiral => {
            let count = 36;
            (0..count)
                .map(|i| {
                    let r = lerp(s * 0.10, s * 0.45, i as f32 / count as f32);
                    at(r, i as f32 * 20.0)
                })
                .collect()
        }
        VisualMode::Grid => {
            let step = s * 0.1;
            let (inner, outer) = (s * 0.12, s * 0.42);
            let mut sensors = Vec::new();
            for i in -4i32..=4 {
                for j in -4i32..=4 {
                    let pos = Vec2::new(i as f32 * step, j as f32 * step);
                    let d = pos.length();
                    if d > inner && d < outer {
                        sensors.push(Sensor::new(pos, base));
                    }
                }
            }
            sensors
        }
    };

    Ok(sensors)
}
