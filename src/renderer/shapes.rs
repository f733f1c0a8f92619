//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::wheel::WheelFrame;

/// Tessellation and palette for a wheel
#[derive(Debug, Clone, Copy)]
pub struct WheelStyle {
    pub wheel: [f32; 4],
    pub sensor: [f32; 4],
    pub hub: [f32; 4],
    /// Outline stroke width (pixels)
    pub stroke: f32,
    /// Segments for the wheel body and hub
    pub body_segments: u32,
    /// Segments for each sensor outline and dot
    pub sensor_segments: u32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            wheel: colors::WHEEL,
            sensor: colors::SENSOR,
            hub: colors::LINE_SUBTLE,
            stroke: 1.0,
            body_segments: 96,
            sensor_segments: 16,
        }
    }
}

/// `segments + 1` points around a circle, first and last coinciding
fn rim(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * TAU;
            center + radius * Vec2::from_angle(theta)
        })
        .collect()
}

fn vertex(p: Vec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x, p.y, color)
}

/// Filled disc as a fan of triangles around `center`
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    rim(center, radius, segments)
        .windows(2)
        .flat_map(|edge| [center, edge[0], edge[1]])
        .map(|p| vertex(p, color))
        .collect()
}

/// Annulus between two radii, one quad (two triangles) per segment.
/// A negative inner radius is treated as zero.
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner = rim(center, inner_radius.max(0.0), segments);
    let outer = rim(center, outer_radius, segments);
    inner
        .windows(2)
        .zip(outer.windows(2))
        .flat_map(|(i, o)| [i[0], o[0], i[1], i[1], o[0], o[1]])
        .map(|p| vertex(p, color))
        .collect()
}

/// Outline of a circle with the given diameter, stroke centered on the edge
fn outline(
    center: Vec2,
    diameter: f32,
    stroke: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let r = diameter / 2.0;
    ring(center, r - stroke / 2.0, r + stroke / 2.0, color, segments)
}

/// Wheel body, sensor outlines and dots, then the hub ring, in draw order.
///
/// Positions are in window coordinates. Sensors do not rotate with the text.
pub fn wheel_vertices(wheel: &WheelFrame, style: &WheelStyle) -> Vec<Vertex> {
    let c = wheel.center;
    let mut vertices = circle(c, wheel.diameter / 2.0, style.wheel, style.body_segments);

    for sensor in &wheel.sensors {
        let pos = c + sensor.pos;
        let segments = style.sensor_segments;
        vertices.extend(outline(pos, sensor.size, style.stroke, style.sensor, segments));
        vertices.extend(circle(pos, sensor.dot / 2.0, style.sensor, segments));
    }

    vertices.extend(outline(c, wheel.hub_diameter, style.stroke, style.hub, style.body_segments));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{Deck, DeckId, SCATTER_SEED, TrackItem, compose_wheel};

    #[test]
    fn test_circle_vertices_on_edge() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, colors::WHEEL, 8);
        assert_eq!(verts.len(), 24);
        let edge = Vec2::from(verts[1].position);
        assert!((edge.distance(Vec2::new(10.0, 10.0)) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_ring_clamps_inner_radius() {
        let verts = ring(Vec2::ZERO, -1.0, 2.0, colors::SENSOR, 4);
        assert_eq!(verts.len(), 24);
        assert!(verts.iter().all(|v| Vec2::from(v.position).length() <= 2.0 + 1e-5));
    }

    #[test]
    fn test_ring_closes_on_itself() {
        let verts = ring(Vec2::ZERO, 1.0, 2.0, colors::SENSOR, 6);
        let first = Vec2::from(verts[0].position);
        let last_inner = Vec2::from(verts[verts.len() - 3].position);
        assert!((first - last_inner).length() < 1e-5);
        assert!((first.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wheel_vertex_count() {
        let mut deck = Deck::new(DeckId::A, vec![TrackItem::new("A", "B", "C")]).unwrap();
        let wheel = compose_wheel(&mut deck, 100.0, Vec2::new(200.0, 150.0), SCATTER_SEED).unwrap();
        let style = WheelStyle::default();
        let verts = wheel_vertices(&wheel, &style);

        let body = style.body_segments as usize * 3;
        let hub = style.body_segments as usize * 6;
        let per_sensor = style.sensor_segments as usize * (6 + 3);
        assert_eq!(verts.len(), body + hub + 12 * per_sensor);

        // Body is centered on the wheel center in window coordinates
        assert_eq!(verts[0].position, [200.0, 150.0]);
    }
}
