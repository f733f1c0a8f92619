//! Rotation smoothing for a deck
//!
//! The displayed rotation chases the target with exponential smoothing. A
//! looping deck also wobbles by a small random amount each frame.

use rand::Rng;

use super::deck::Deck;
use crate::consts::{MAX_LOOP_JITTER_DEG, ROTATION_SMOOTHING};
use crate::lerp;

/// Parameters for one rotation step
#[derive(Debug, Clone, Copy)]
pub struct RotationParams {
    /// Maximum loop jitter (degrees)
    pub jitter_deg: f32,
    /// Rotation gap above which the wheel clicks
    pub click_speed: f32,
    /// Click at most every N frames
    pub click_interval: u64,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            jitter_deg: 2.0,
            click_speed: 5.0,
            click_interval: 6,
        }
    }
}

/// Smoothing step without jitter
#[inline]
pub fn smooth_rotation(rotation: f32, target: f32) -> f32 {
    lerp(rotation, target, ROTATION_SMOOTHING)
}

/// Advance a deck's rotation by one frame.
///
/// Returns true when the wheel should click (fast spin on a click frame).
pub fn advance_rotation<R: Rng>(
    deck: &mut Deck,
    rng: &mut R,
    frame: u64,
    params: &RotationParams,
) -> bool {
    deck.rotation = smooth_rotation(deck.rotation, deck.target_rotation);
    // NaN fails the comparison and skips jitter
    if deck.looping && params.jitter_deg > 0.0 {
        let jitter = params.jitter_deg.min(MAX_LOOP_JITTER_DEG);
        deck.rotation += rng.random_range(-jitter..=jitter);
    }

    let speed = (deck.rotation - deck.target_rotation).abs();
    speed > params.click_speed && params.click_interval > 0 && frame % params.click_interval == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{DeckId, TrackItem};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn deck() -> Deck {
        Deck::new(DeckId::A, vec![TrackItem::new("A", "B", "C")]).unwrap()
    }

    #[test]
    fn test_converges_within_50_ticks() {
        let mut rotation = 0.0;
        for _ in 0..50 {
            rotation = smooth_rotation(rotation, 100.0);
        }
        assert!((rotation - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_click_only_on_interval_frames() {
        let mut rng = Pcg32::seed_from_u64(1);
        let params = RotationParams::default();

        let mut deck = deck();
        deck.target_rotation = 180.0;
        assert!(!advance_rotation(&mut deck, &mut rng, 1, &params));

        let mut deck = self::deck();
        deck.target_rotation = 180.0;
        assert!(advance_rotation(&mut deck, &mut rng, 6, &params));
    }

    #[test]
    fn test_no_click_when_settled() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut deck = deck();
        deck.target_rotation = 3.0;
        assert!(!advance_rotation(&mut deck, &mut rng, 0, &RotationParams::default()));
    }

    #[test]
    fn test_loop_jitter_is_bounded() {
        let mut rng = Pcg32::seed_from_u64(7);
        let params = RotationParams::default();
        let mut deck = deck();
        deck.looping = true;
        for frame in 0..200 {
            let before = deck.rotation;
            advance_rotation(&mut deck, &mut rng, frame, &params);
            // Target is 0, so smoothing alone would shrink |rotation|
            let smoothed = smooth_rotation(before, 0.0);
            assert!((deck.rotation - smoothed).abs() <= 2.0 + 1e-5);
        }
    }

    #[test]
    fn test_oversized_jitter_is_capped() {
        let mut rng = Pcg32::seed_from_u64(3);
        for jitter_deg in [3e38, f32::INFINITY, f32::NAN] {
            let params = RotationParams {
                jitter_deg,
                ..RotationParams::default()
            };
            let mut deck = deck();
            deck.looping = true;
            for frame in 0..20 {
                advance_rotation(&mut deck, &mut rng, frame, &params);
            }
            assert!(deck.rotation.is_finite());
        }
    }

    #[test]
    fn test_no_jitter_when_not_looping() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut deck = deck();
        advance_rotation(&mut deck, &mut rng, 0, &RotationParams::default());
        assert_eq!(deck.rotation, 0.0);
    }
}
