//! Text-to-sensor collision marking
//!
//! The second half of the sensor animation. After [`Deck::reset_sensor_targets`]
//! has dropped every target to base, each ring's characters raise the target of
//! any sensor they pass over. The raised target is only visible next frame,
//! once the animator eases toward it.
//!
//! [`Deck::reset_sensor_targets`]: super::Deck::reset_sensor_targets

use super::sensor::Sensor;
use super::text::GlyphPlacement;
use crate::consts::{HIT_DISTANCE, SENSOR_BULGE};

/// Raise the target of every sensor within hit distance of a placed character.
///
/// Returns the number of sensors hit by this ring.
pub fn apply_text_collisions(sensors: &mut [Sensor], ring: &[GlyphPlacement], s: f32) -> usize {
    let hit_dist = s * HIT_DISTANCE;
    let bulge = s * SENSOR_BULGE;

    let mut hits = 0;
    for sensor in sensors.iter_mut() {
        if ring.iter().any(|glyph| glyph.probe.distance(sensor.pos) < hit_dist) {
            sensor.target = bulge;
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::text::layout_ring;
    use glam::Vec2;

    #[test]
    fn test_sensor_under_text_bulges() {
        // First character probe lands at (0, -18) for s = 100
        let mut sensors = vec![
            Sensor::new(Vec2::new(0.0, -18.0), 2.0),
            Sensor::new(Vec2::new(0.0, 18.0), 2.0),
        ];
        let ring = layout_ring("A", 18.0, 0.0, 100.0);
        let hits = apply_text_collisions(&mut sensors, &ring, 100.0);
        assert_eq!(hits, 1);
        assert!((sensors[0].target - 7.0).abs() < 1e-5);
        assert_eq!(sensors[1].target, 2.0);
        // Displayed size is untouched until the animator runs
        assert_eq!(sensors[0].current, 2.0);
    }

    #[test]
    fn test_hit_distance_boundary() {
        let mut sensors = vec![
            Sensor::new(Vec2::new(4.5, -18.0), 2.0),
            Sensor::new(Vec2::new(5.5, -18.0), 2.0),
        ];
        let ring = layout_ring("A", 18.0, 0.0, 100.0);
        // Hit distance is 5.0 at s = 100
        assert_eq!(apply_text_collisions(&mut sensors, &ring, 100.0), 1);
        assert!((sensors[0].target - 7.0).abs() < 1e-5);
        assert_eq!(sensors[1].target, 2.0);
    }

    #[test]
    fn test_repeated_hits_keep_same_bulge() {
        let mut sensors = vec![Sensor::new(Vec2::new(0.0, -28.0), 2.0)];
        let ring = layout_ring("AAAA", 28.0, 0.0, 100.0);
        apply_text_collisions(&mut sensors, &ring, 100.0);
        apply_text_collisions(&mut sensors, &ring, 100.0);
        assert!((sensors[0].target - 7.0).abs() < 1e-5);
    }
}
