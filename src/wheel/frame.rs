//! Per-frame wheel composition
//!
//! Runs the second half of a deck's frame (sensor validation, ring layout and
//! collision marking) and packages the result for the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::apply_text_collisions;
use super::deck::{Deck, DeckId};
use super::sensor::VisualMode;
use super::text::{GlyphPlacement, layout_ring};
use crate::consts::*;
use crate::error::Result;

/// Ring order within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingKind {
    Title,
    Description,
    Status,
}

impl RingKind {
    pub const ORDER: [RingKind; 3] = [RingKind::Title, RingKind::Description, RingKind::Status];
}

/// A sensor as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorView {
    pub pos: Vec2,
    /// Displayed outline diameter
    pub size: f32,
    /// Center dot diameter
    pub dot: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRing {
    pub kind: RingKind,
    pub radius: f32,
    pub glyphs: Vec<GlyphPlacement>,
}

/// Renderable description of one jog wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelFrame {
    pub deck: DeckId,
    pub mode: VisualMode,
    /// Wheel center in window coordinates
    pub center: Vec2,
    pub diameter: f32,
    pub hub_diameter: f32,
    pub font_size: f32,
    /// Deck rotation (degrees)
    pub rotation: f32,
    /// Sensors relative to `center`
    pub sensors: Vec<SensorView>,
    /// Text rings relative to `center`
    pub rings: Vec<TextRing>,
}

/// Lay out the deck's three text rings and mark collisions.
///
/// Must run after [`Deck::reset_sensor_targets`] for this frame.
pub fn compose_wheel(
    deck: &mut Deck,
    s: f32,
    center: Vec2,
    scatter_seed: u64,
) -> Result<WheelFrame> {
    deck.ensure_sensors(s, scatter_seed)?;

    let texts = deck.current_track().rings().map(str::to_owned);
    let mut rings = Vec::with_capacity(RingKind::ORDER.len());
    for ((kind, text), frac) in RingKind::ORDER.into_iter().zip(&texts).zip(RING_RADII) {
        let radius = s * frac;
        let glyphs = layout_ring(text, radius, deck.rotation, s);
        apply_text_collisions(&mut deck.sensors, &glyphs, s);
        rings.push(TextRing { kind, radius, glyphs });
    }

    let dot = s * SENSOR_DOT;
    Ok(WheelFrame {
        deck: deck.id,
        mode: deck.mode,
        center,
        diameter: s,
        hub_diameter: s * HUB_DIAMETER,
        font_size: s * FONT_SIZE,
        rotation: deck.rotation,
        sensors: deck
            .sensors
            .iter()
            .map(|sensor| SensorView {
                pos: sensor.pos,
                size: sensor.current,
                dot,
            })
            .collect(),
        rings,
    })
}
