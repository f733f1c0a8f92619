//! Wheel tessellation
//!
//! Turns a [`WheelFrame`](crate::wheel::WheelFrame) into colored triangles that a
//! GPU host can upload as-is. Glyphs are left to the host's text renderer.

pub mod shapes;
pub mod vertex;

pub use shapes::{WheelStyle, wheel_vertices};
pub use vertex::Vertex;
