//! Radial text layout
//!
//! Characters are spaced by a constant arc length rather than a constant angle,
//! so the three rings read with the same letter spacing despite different radii.
//!
//! Each character gets two positions:
//! - a probe at `local + rotation - 90` degrees, used for sensor collisions
//! - the drawn glyph, whose frame is rotated by `local + rotation - 90` and
//!   offset by `(0, -radius)`, which puts it at `local + rotation - 180`

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ARC_SPACING;
use crate::polar_to_cartesian;

/// One placed character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Angle along the ring before deck rotation (degrees)
    pub local_angle: f32,
    /// Collision probe position relative to wheel center
    pub probe: Vec2,
    /// Where the glyph is drawn relative to wheel center
    pub position: Vec2,
    /// Glyph rotation (degrees); glyph baseline is tangent to the ring
    pub rotation: f32,
}

/// Angular step (degrees) that yields the desired arc length on a ring of `radius`
#[inline]
pub fn angle_step(radius: f32, s: f32) -> f32 {
    (s * ARC_SPACING / radius).to_degrees()
}

/// Lay out `text` on a ring of `radius` for a deck at `deck_rotation` degrees
pub fn layout_ring(text: &str, radius: f32, deck_rotation: f32, s: f32) -> Vec<GlyphPlacement> {
    let step = angle_step(radius, s);

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let local_angle = i as f32 * step;
            let world_angle = (local_angle + deck_rotation - 90.0) % 360.0;
            let glyph_rotation = deck_rotation + local_angle - 90.0;
            GlyphPlacement {
                ch,
                local_angle,
                probe: polar_to_cartesian(radius, world_angle),
                position: polar_to_cartesian(radius, glyph_rotation - 90.0),
                rotation: glyph_rotation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_char_probe_at_top() {
        // Index 0 with no rotation sits at -90 degrees
        let glyphs = layout_ring("AB", 18.0, 0.0, 100.0);
        assert_eq!(glyphs.len(), 2);
        assert!((glyphs[0].probe - Vec2::new(0.0, -18.0)).length() < 1e-4);
        assert_eq!(glyphs[0].local_angle, 0.0);
    }

    #[test]
    fn test_rotation_moves_probe() {
        let glyphs = layout_ring("A", 28.0, 90.0, 100.0);
        assert!((glyphs[0].probe - Vec2::new(28.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_glyph_frame_matches_rotate_then_translate() {
        let glyphs = layout_ring("XYZ", 38.0, 33.0, 100.0);
        for g in &glyphs {
            let theta = g.rotation.to_radians();
            // rotate(theta) applied to (0, -r)
            let expected = Vec2::new(38.0 * theta.sin(), -38.0 * theta.cos());
            assert!((g.position - expected).length() < 1e-3);
        }
    }

    #[test]
    fn test_spaces_are_placed() {
        let glyphs = layout_ring("A B", 18.0, 0.0, 100.0);
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[1].ch, ' ');
    }

    #[test]
    fn test_larger_ring_has_smaller_step() {
        assert!(angle_step(38.0, 100.0) < angle_step(18.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_constant_arc_length(s in 1.0f32..2000.0, frac in 0.01f32..1.0) {
            let r = s * frac;
            let arc = angle_step(r, s).to_radians() * r;
            prop_assert!((arc - s * 0.05).abs() < 1e-3 * s);
        }

        #[test]
        fn prop_neighbours_are_one_arc_apart(s in 10.0f32..1000.0, rotation in -720.0f32..720.0) {
            let r = s * 0.28;
            let glyphs = layout_ring("ABCD", r, rotation, s);
            for pair in glyphs.windows(2) {
                let chord = (pair[1].probe - pair[0].probe).length();
                // Chord is slightly shorter than the arc it spans
                prop_assert!(chord <= s * 0.05 + 1e-3 * s);
                prop_assert!(chord >= s * 0.05 * 0.98);
            }
        }
    }
}
