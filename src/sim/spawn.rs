//! Spawn scheduling
//!
//! The platform track is the only independently scheduled cadence; coins and
//! fires ride along as probabilistic side effects of a platform spawn. The
//! cadence is distance-based: once the closest platform's trailing gap to
//! the right boundary exceeds the last-sampled spawn distance, exactly one
//! new platform is emitted and the distance is resampled.

use glam::Vec2;
use rand::Rng;

use super::geometry;
use super::state::{GameEvent, GameState, ObjectKind};
use crate::consts::*;

/// Distance from the right world boundary to the nearest platform's right
/// edge, and the vertical position of that platform. `(screen_width, 0.0)`
/// when no platform is active.
pub(crate) fn rightmost_gap(state: &GameState) -> (f32, f32) {
    let mut min_distance = SCREEN_WIDTH;
    let mut rightmost_y = 0.0;
    for platform in &state.platforms {
        let distance = SCREEN_WIDTH - platform.right_edge();
        if distance < min_distance {
            min_distance = distance;
            rightmost_y = platform.pos.y;
        }
    }
    (min_distance, rightmost_y)
}

/// Per-tick cadence check. Emits at most one platform spawn.
pub(crate) fn update(state: &mut GameState) {
    let (min_distance, rightmost_y) = rightmost_gap(state);
    if min_distance > state.spawn.next_platform_distance {
        let proposal =
            geometry::propose_platform(&state.config, &mut state.rng, rightmost_y, SCREEN_HEIGHT);
        spawn_platform(
            state,
            proposal.width,
            SCREEN_WIDTH + proposal.width / 2.0,
            proposal.y,
        );
    }
}

/// Emit one platform at the given geometry, resample the spawn distance,
/// and probabilistically attach a coin and/or a fire hazard.
///
/// Attachment draws are independent Bernoulli trials; the very first
/// platform of a run never carries attachments.
pub(crate) fn spawn_platform(state: &mut GameState, width: f32, x: f32, y: f32) {
    state.spawn.spawned_platforms += 1;

    let [speed_min, speed_max] = state.config.platform_speed_range;
    let fresh_speed = -state.rng.random_range(speed_min..=speed_max);
    let id = state.spawn_or_reuse(
        ObjectKind::Platform,
        Vec2::new(x, y),
        width,
        fresh_speed,
    );
    // Attachments scroll with the platform they spawned over, whatever speed
    // it actually carries (a reused platform keeps its old one).
    let platform_velocity = state
        .platforms
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.velocity_x)
        .unwrap_or(fresh_speed);

    let [gap_min, gap_max] = state.config.spawn_range;
    state.spawn.next_platform_distance = state.rng.random_range(gap_min..=gap_max);
    state.events.push(GameEvent::PlatformSpawned { id });
    log::debug!(
        "platform {id} spawned: width={width:.0} y={y:.0} next_gap={:.0}",
        state.spawn.next_platform_distance
    );

    if state.spawn.spawned_platforms > 1 {
        if state.rng.random_range(1..=100) <= state.config.coin_percent {
            let coin_id = state.spawn_or_reuse(
                ObjectKind::Coin,
                Vec2::new(x, y - COIN_RAISE),
                COIN_SIZE,
                platform_velocity,
            );
            state.events.push(GameEvent::CoinSpawned { id: coin_id });
        }
        if state.rng.random_range(1..=100) <= state.config.fire_percent {
            let fire_x = x - width / 2.0 + state.rng.random_range(0.0..=width);
            let fire_id = state.spawn_or_reuse(
                ObjectKind::Fire,
                Vec2::new(fire_x, y - FIRE_RAISE),
                FIRE_WIDTH,
                platform_velocity,
            );
            state.events.push(GameEvent::FireSpawned { id: fire_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameplayConfig;

    #[test]
    fn test_no_attachments_on_first_platform() {
        let config = GameplayConfig {
            coin_percent: 100,
            fire_percent: 100,
            ..GameplayConfig::default()
        };

        // GameState::new spawns the floor platform with the guard active
        let state = GameState::new(5, config);
        assert_eq!(state.spawn.spawned_platforms, 1);
        assert!(state.coins.is_empty());
        assert!(state.fires.is_empty());
    }

    #[test]
    fn test_certain_attachments_after_first_platform() {
        let config = GameplayConfig {
            coin_percent: 100,
            fire_percent: 100,
            ..GameplayConfig::default()
        };

        let mut state = GameState::new(5, config);
        spawn_platform(&mut state, 200.0, SCREEN_WIDTH + 100.0, 500.0);

        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.fires.len(), 1);
        let platform = state.platforms.last().unwrap();
        let coin = &state.coins[0];
        let fire = &state.fires[0];
        assert_eq!(coin.pos, Vec2::new(platform.pos.x, 500.0 - COIN_RAISE));
        assert_eq!(coin.velocity_x, platform.velocity_x);
        assert_eq!(fire.pos.y, 500.0 - FIRE_RAISE);
        assert!(fire.pos.x >= platform.left_edge());
        assert!(fire.pos.x <= platform.right_edge());
        assert_eq!(fire.velocity_x, platform.velocity_x);
    }

    #[test]
    fn test_spawn_distance_resampled_from_range() {
        let mut state = GameState::new(9, GameplayConfig::default());
        for _ in 0..100 {
            spawn_platform(&mut state, 150.0, SCREEN_WIDTH + 75.0, 450.0);
            let gap = state.spawn.next_platform_distance;
            assert!(gap >= state.config.spawn_range[0]);
            assert!(gap <= state.config.spawn_range[1]);
        }
    }

    /// With coin_percent=45, the observed coin rate over 100k spawns
    /// (excluding the first) stays within ±1.5% of 45%.
    #[test]
    fn test_coin_probability_converges() {
        let config = GameplayConfig {
            coin_percent: 45,
            fire_percent: 0,
            ..GameplayConfig::default()
        };
        let mut state = GameState::new(1234, config);

        const SPAWNS: u32 = 100_000;
        let mut coins_spawned = 0u32;
        for _ in 0..SPAWNS {
            let coins_before = state.coins.len();
            spawn_platform(&mut state, 150.0, SCREEN_WIDTH + 75.0, 450.0);
            if state.coins.len() > coins_before {
                coins_spawned += 1;
            }
            // Recycle so the active sets stay small; this also hammers the
            // pool-reuse path for the whole duration.
            while let Some(c) = state.coins.pop() {
                state.coin_pool.release(c);
            }
            while let Some(p) = state.platforms.pop() {
                state.platform_pool.release(p);
            }
        }

        let rate = coins_spawned as f64 / SPAWNS as f64;
        assert!(
            (rate - 0.45).abs() < 0.015,
            "observed coin rate {rate} outside tolerance"
        );
    }

    #[test]
    fn test_rightmost_gap_tracks_closest_platform() {
        let mut state = GameState::new(2, GameplayConfig::default());
        // Floor platform spans the screen: gap is zero, height is the floor's
        let (gap, y) = rightmost_gap(&state);
        assert_eq!(gap, 0.0);
        assert_eq!(y, state.platforms[0].pos.y);

        // A platform hanging past the right edge drives the gap negative
        spawn_platform(&mut state, 200.0, SCREEN_WIDTH + 100.0, 420.0);
        let (gap, y) = rightmost_gap(&state);
        assert_eq!(gap, -200.0);
        assert_eq!(y, 420.0);
    }
}
