//! Level geometry policy
//!
//! Pure computation of the next platform's width and height, invoked once
//! per spawn trigger. The vertical clamp keeps the traversal corridor within
//! jump reach of the previous platform, the one tuning relationship the
//! whole game depends on (see `GameplayConfig` docs).

use rand::Rng;

use crate::GameplayConfig;

/// Geometry for one platform spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProposal {
    pub width: f32,
    pub y: f32,
}

/// Propose the next platform relative to the current rightmost one.
///
/// The height step is drawn as an integer number of `platform_high_scale`
/// pixel units, then the result is clamped into the traversal corridor.
pub fn propose_platform(
    config: &GameplayConfig,
    rng: &mut impl Rng,
    last_platform_y: f32,
    screen_height: f32,
) -> PlatformProposal {
    let [size_min, size_max] = config.platform_size_range;
    let [step_min, step_max] = config.platform_height_range;

    let width = rng.random_range(size_min..=size_max);
    let step = config.platform_high_scale * rng.random_range(step_min..=step_max) as f32;
    let y = clamp_to_corridor(last_platform_y + step, config, screen_height);

    PlatformProposal { width, y }
}

/// Clamp a proposed platform height into the configured corridor.
pub fn clamp_to_corridor(proposed_y: f32, config: &GameplayConfig, screen_height: f32) -> f32 {
    proposed_y.clamp(
        config.corridor_min(screen_height),
        config.corridor_max(screen_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_HEIGHT;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_pins_runaway_heights() {
        let cfg = GameplayConfig::default();
        assert_eq!(clamp_to_corridor(-5000.0, &cfg, SCREEN_HEIGHT), 300.0);
        assert_eq!(clamp_to_corridor(10_000.0, &cfg, SCREEN_HEIGHT), 600.0);
        assert_eq!(clamp_to_corridor(450.0, &cfg, SCREEN_HEIGHT), 450.0);
    }

    #[test]
    fn test_width_within_size_range() {
        let cfg = GameplayConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let p = propose_platform(&cfg, &mut rng, 500.0, SCREEN_HEIGHT);
            assert!(p.width >= cfg.platform_size_range[0]);
            assert!(p.width <= cfg.platform_size_range[1]);
        }
    }

    proptest! {
        /// The sampled y always lands in the corridor, no matter how far the
        /// previous platform drifted or which seed is used.
        #[test]
        fn prop_y_stays_in_corridor(last_y in -10_000.0f32..10_000.0, seed in any::<u64>()) {
            let cfg = GameplayConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = propose_platform(&cfg, &mut rng, last_y, SCREEN_HEIGHT);
            prop_assert!(p.y >= cfg.corridor_min(SCREEN_HEIGHT));
            prop_assert!(p.y <= cfg.corridor_max(SCREEN_HEIGHT));
        }
    }
}
