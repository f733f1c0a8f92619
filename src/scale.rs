//! Panel layout and the wheel reference scale
//!
//! Every wheel distance is `s * constant`, where `s` comes from the deck panel
//! size. Keeping a single scale keeps the wheel's proportions fixed when the
//! window is resized.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, WheelError};
use crate::wheel::DeckId;

/// Resolve the wheel reference scale from deck panel dimensions
pub fn scale_base(panel_width: f32, panel_height: f32) -> Result<f32> {
    // `min` would hide a NaN side, so check each side first
    for side in [panel_width, panel_height] {
        validate_scale(side)?;
    }
    validate_scale(panel_width.min(panel_height) * SCALE_FACTOR)
}

/// Reject scales that would make ring radii zero, negative or NaN
pub fn validate_scale(s: f32) -> Result<f32> {
    if s.is_finite() && s > 0.0 {
        Ok(s)
    } else {
        Err(WheelError::InvalidScale(s))
    }
}

/// One deck panel in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckPanel {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    /// Jog wheel center in window coordinates
    pub wheel_center: Vec2,
}

/// Window-level layout of both decks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub window: Vec2,
    pub deck_a: DeckPanel,
    pub deck_b: DeckPanel,
    /// Wheel reference scale shared by both decks
    pub scale: f32,
}

impl PanelLayout {
    /// Lay out both deck panels for a window
    pub fn from_window(width: f32, height: f32) -> Result<Self> {
        let panel_w = width * DECK_PANEL_WIDTH;
        let panel_h = height * DECK_PANEL_HEIGHT;
        let scale = scale_base(panel_w, panel_h)?;

        let panel = |x_frac: f32| {
            let center = Vec2::new(width * x_frac, height * DECK_PANEL_Y);
            DeckPanel {
                center,
                width: panel_w,
                height: panel_h,
                wheel_center: center + Vec2::new(0.0, panel_h * WHEEL_OFFSET_Y),
            }
        };

        Ok(Self {
            window: Vec2::new(width, height),
            deck_a: panel(DECK_A_X),
            deck_b: panel(DECK_B_X),
            scale,
        })
    }

    pub fn panel(&self, deck: DeckId) -> &DeckPanel {
        match deck {
            DeckId::A => &self.deck_a,
            DeckId::B => &self.deck_b,
        }
    }
}
