//! Fixed timestep simulation tick
//!
//! One tick per rendered frame, strictly frame-sequential. All mutation of
//! the active sets and pools happens synchronously inside the tick; the only
//! deferred effect is the coin-collect countdown, which releases the coin to
//! its pool when the tween window ends.

use super::background;
use super::player;
use super::spawn;
use super::state::{GameEvent, GameState, RunPhase};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump request (tap/click/space)
    pub jump: bool,
    /// Start a fresh run (honored on the game-over screen only)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == RunPhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    if input.jump {
        state.on_jump_requested();
    }

    // Scroll the world
    for obj in state
        .platforms
        .iter_mut()
        .chain(state.coins.iter_mut())
        .chain(state.fires.iter_mut())
    {
        obj.pos.x += obj.velocity_x * dt;
    }
    for mountain in &mut state.mountains {
        mountain.pos.x -= state.config.mountain_speed * dt;
    }
    if state.phase == RunPhase::Running {
        state.run.distance += state.config.platform_speed_range[0] * dt;
    }

    player::integrate(state, dt);

    spawn::update(state);
    background::recycle(state);
    state.cull_offscreen();
    finish_collected_coins(state);

    // Falling past the bottom boundary ends the run, dying or not
    if state.player.pos.y > SCREEN_HEIGHT {
        state.phase = RunPhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.run.score,
        });
        log::info!(
            "game over: score={} coins={} distance={:.0}",
            state.run.score,
            state.run.coins,
            state.run.distance
        );
    }

    // Contact must be re-reported by the engine every frame
    state.player.touching_down = false;
    state.time_ticks += 1;
}

/// Count down collect tweens and release finished coins to the pool.
fn finish_collected_coins(state: &mut GameState) {
    let mut i = 0;
    while i < state.coins.len() {
        match state.coins[i].fade_ticks {
            Some(0) => {
                let coin = state.coins.swap_remove(i);
                state.coin_pool.release(coin);
            }
            Some(ticks) => {
                state.coins[i].fade_ticks = Some(ticks - 1);
                i += 1;
            }
            None => i += 1,
        }
    }
}
