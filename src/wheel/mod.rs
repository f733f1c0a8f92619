//! Kinetic jog wheel core
//!
//! Everything here is deterministic for a given scale and input sequence:
//! - Sensor fields are pure functions of `(mode, s)`
//! - Randomness comes from seeded PCG generators only
//! - Rings are laid out in a fixed order (title, description, status)
//! - No rendering or platform dependencies

pub mod collision;
pub mod deck;
pub mod frame;
pub mod rotation;
pub mod sensor;
pub mod text;

pub use collision::apply_text_collisions;
pub use deck::{Deck, DeckId, TrackItem};
pub use frame::{RingKind, SensorView, TextRing, WheelFrame, compose_wheel};
pub use rotation::{RotationParams, advance_rotation, smooth_rotation};
pub use sensor::{SCATTER_SEED, Sensor, VisualMode, generate, generate_seeded};
pub use text::{GlyphPlacement, angle_step, layout_ring};
