//! Parallax background filler
//!
//! Mountains scroll left at a constant speed slower than the platforms.
//! They are never pooled: an element that exits the left edge is repositioned
//! past the current rightmost one with fresh vertical jitter, variant, and
//! depth layer. The populated window spans `[0, 2 * screen_width]`.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Mountain};
use crate::consts::*;

/// Rightmost mountain anchor x, or the seeding offset when none exist yet.
pub(crate) fn rightmost_x(mountains: &[Mountain]) -> f32 {
    mountains.iter().fold(-200.0, |acc, m| acc.max(m.pos.x))
}

/// Rebuild the backdrop from scratch, appending mountains until the
/// rightmost one clears the fill window.
pub(crate) fn fill(state: &mut GameState) {
    state.mountains.clear();
    while rightmost_x(&state.mountains) < MOUNTAIN_FILL_FACTOR * SCREEN_WIDTH {
        let x = rightmost_x(&state.mountains)
            + state.rng.random_range(MOUNTAIN_GAP_MIN..=MOUNTAIN_GAP_MAX);
        state.mountains.push(Mountain {
            pos: Vec2::new(x, jitter_y(&mut state.rng)),
            variant: state.rng.random_range(0..MOUNTAIN_VARIANTS),
            near_layer: state.rng.random_bool(0.5),
        });
    }
}

/// Reposition any mountain that has fully scrolled off the left edge to the
/// right end of the window. Run once per tick.
pub(crate) fn recycle(state: &mut GameState) {
    for i in 0..state.mountains.len() {
        if state.mountains[i].pos.x < -MOUNTAIN_WIDTH {
            let x = rightmost_x(&state.mountains)
                + state.rng.random_range(MOUNTAIN_GAP_MIN..=MOUNTAIN_GAP_MAX);
            let y = jitter_y(&mut state.rng);
            let variant = state.rng.random_range(0..MOUNTAIN_VARIANTS);
            let near_layer = state.rng.random_bool(0.5);

            let mountain = &mut state.mountains[i];
            mountain.pos = Vec2::new(x, y);
            mountain.variant = variant;
            mountain.near_layer = near_layer;
        }
    }
}

/// Bottom-anchored vertical placement with random downward jitter.
fn jitter_y(rng: &mut impl Rng) -> f32 {
    SCREEN_HEIGHT + rng.random_range(0.0..=MOUNTAIN_JITTER_MAX)
}
