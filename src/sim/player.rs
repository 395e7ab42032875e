//! Player-control boundary
//!
//! Thin glue over the registry's collision contract: jump acceptance with a
//! limited air-jump budget, the non-interactive dying sub-state, and the
//! minimal vertical kinematics needed for the bottom-boundary termination to
//! be observable without a physics engine.
//!
//! Grounded state is owned by the engine: it must call
//! [`GameState::on_platform_collision`] every frame the player stands on a
//! platform; the flag is consumed and cleared at the end of each tick.

use super::state::{GameEvent, GameState, RunPhase};
use crate::consts::*;

impl GameState {
    /// Jump input. Accepted iff the player is grounded or still has air
    /// jumps left (`0 < jumps_used < jumps`). Returns whether the impulse
    /// was applied. Ignored entirely while dying or after game over.
    pub fn on_jump_requested(&mut self) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        let down = self.player.touching_down;
        let air_jump_available =
            self.run.player_jumps > 0 && self.run.player_jumps < self.config.jumps;
        if !(down || air_jump_available) {
            return false;
        }
        if down {
            self.run.player_jumps = 0;
        }
        self.player.velocity_y = -self.config.jump_force;
        self.run.player_jumps += 1;
        true
    }

    /// Engine-reported platform contact. Grounds the player on the reported
    /// surface and restores the jump budget. No-op while dying: the platform
    /// collision response is disabled so the player falls through.
    pub fn on_platform_collision(&mut self, surface_y: f32) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.player.touching_down = true;
        self.run.player_jumps = 0;
        if self.player.velocity_y >= 0.0 {
            self.player.velocity_y = 0.0;
            self.player.pos.y = surface_y - PLAYER_HEIGHT / 2.0;
        }
    }

    /// Engine-reported coin overlap. Scores the coin and starts its collect
    /// tween; the release to the pool happens when the tween finishes. A
    /// coin already fading is ignored, so repeated overlap reports during
    /// the window cannot double-score. Returns whether the coin was scored.
    pub fn on_coin_overlap(&mut self, id: u32) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        let Some(coin) = self.coins.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if coin.fade_ticks.is_some() {
            return false;
        }
        coin.fade_ticks = Some(COIN_FADE_TICKS);
        self.run.coins += 1;
        self.run.score += COIN_VALUE;
        self.events.push(GameEvent::CoinCollected {
            id,
            score: self.run.score,
        });
        true
    }

    /// Engine-reported fire overlap. Enters the dying sub-state: a small
    /// upward pop, then gravity carries the player out of the world. Jump
    /// input and platform contact are rejected from here on. Ignored if
    /// already dying.
    pub fn on_hazard_overlap(&mut self, id: u32) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.phase = RunPhase::Dying;
        self.player.velocity_y = DEATH_POP_VELOCITY;
        self.player.touching_down = false;
        self.events.push(GameEvent::HazardHit { id });
        log::info!("player hit fire {id} at distance {:.0}", self.run.distance);
    }
}

/// Vertical kinematics for one tick. Horizontal position stays pinned.
pub(crate) fn integrate(state: &mut GameState, dt: f32) {
    state.player.velocity_y += state.config.player_gravity * dt;
    state.player.pos.y += state.player.velocity_y * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameplayConfig;

    fn grounded_state() -> GameState {
        let mut state = GameState::new(21, GameplayConfig::default());
        state.on_platform_collision(SCREEN_HEIGHT * 0.8 - PLATFORM_THICKNESS / 2.0);
        state
    }

    #[test]
    fn test_grounded_jump_accepted() {
        let mut state = grounded_state();
        assert!(state.on_jump_requested());
        assert_eq!(state.player.velocity_y, -state.config.jump_force);
        assert_eq!(state.run.player_jumps, 1);
    }

    #[test]
    fn test_air_jump_budget() {
        let mut state = grounded_state();
        assert!(state.on_jump_requested());
        state.player.touching_down = false;

        // Second (air) jump allowed, third rejected
        assert!(state.on_jump_requested());
        assert_eq!(state.run.player_jumps, 2);
        assert!(!state.on_jump_requested());
        assert_eq!(state.run.player_jumps, 2);
    }

    #[test]
    fn test_airborne_without_jumping_cannot_jump() {
        let mut state = GameState::new(22, GameplayConfig::default());
        // Never grounded, never jumped: walked off an edge
        assert!(!state.on_jump_requested());
    }

    #[test]
    fn test_grounding_restores_jump_budget() {
        let mut state = grounded_state();
        state.on_jump_requested();
        state.player.touching_down = false;
        state.on_jump_requested();

        state.on_platform_collision(500.0);
        assert_eq!(state.run.player_jumps, 0);
        assert!(state.on_jump_requested());
    }

    #[test]
    fn test_landing_snaps_to_surface() {
        let mut state = GameState::new(23, GameplayConfig::default());
        state.player.velocity_y = 250.0;
        state.on_platform_collision(600.0 - PLATFORM_THICKNESS / 2.0);
        assert_eq!(state.player.velocity_y, 0.0);
        assert_eq!(
            state.player.pos.y,
            600.0 - PLATFORM_THICKNESS / 2.0 - PLAYER_HEIGHT / 2.0
        );
    }

    #[test]
    fn test_rising_through_platform_does_not_snap() {
        let mut state = GameState::new(24, GameplayConfig::default());
        let y_before = state.player.pos.y;
        state.player.velocity_y = -300.0;
        state.on_platform_collision(500.0);
        assert_eq!(state.player.velocity_y, -300.0);
        assert_eq!(state.player.pos.y, y_before);
        // Contact still restores the jump budget
        assert!(state.player.touching_down);
    }

    #[test]
    fn test_hazard_overlap_enters_dying_and_locks_input() {
        let mut state = grounded_state();
        state.on_hazard_overlap(99);
        assert_eq!(state.phase, RunPhase::Dying);
        assert_eq!(state.player.velocity_y, DEATH_POP_VELOCITY);

        // Jumps and platform contact are dead now
        assert!(!state.on_jump_requested());
        let vy = state.player.velocity_y;
        state.on_platform_collision(500.0);
        assert!(!state.player.touching_down);
        assert_eq!(state.player.velocity_y, vy);
    }

    #[test]
    fn test_second_hazard_overlap_is_noop() {
        let mut state = grounded_state();
        state.on_hazard_overlap(1);
        let events_before = state.events.len();
        state.on_hazard_overlap(2);
        assert_eq!(state.events.len(), events_before);
    }

    #[test]
    fn test_coin_overlap_scores_once() {
        let config = GameplayConfig {
            coin_percent: 100,
            ..GameplayConfig::default()
        };
        let mut state = GameState::new(25, config);
        super::super::spawn::spawn_platform(&mut state, 200.0, SCREEN_WIDTH + 100.0, 500.0);
        let coin_id = state.coins[0].id;

        assert!(state.on_coin_overlap(coin_id));
        assert_eq!(state.run.score, COIN_VALUE);
        assert_eq!(state.run.coins, 1);
        assert_eq!(state.coins[0].fade_ticks, Some(COIN_FADE_TICKS));

        // Overlap keeps firing while the tween runs: no double score
        assert!(!state.on_coin_overlap(coin_id));
        assert_eq!(state.run.score, COIN_VALUE);
        assert_eq!(state.run.coins, 1);
    }

    #[test]
    fn test_unknown_coin_overlap_ignored() {
        let mut state = GameState::new(26, GameplayConfig::default());
        assert!(!state.on_coin_overlap(4242));
        assert_eq!(state.run.score, 0);
    }
}
