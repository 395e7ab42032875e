//! Ridge Runner entry point
//!
//! Headless demo harness. The simulation core treats rendering, input, and
//! overlap detection as an external engine; this binary plays that role with
//! axis-aligned box checks and a small autopilot, then prints a run summary.
//!
//! Usage: `ridge-runner [seed] [runs]`

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use ridge_runner::HighScores;
use ridge_runner::consts::*;
use ridge_runner::sim::{GameEvent, GameState, RunPhase, TickInput, tick};

const HIGH_SCORE_FILE: &str = "highscores.json";
/// Give up on a run after this much simulated time
const MAX_RUN_TICKS: u64 = 60 * 60 * 5;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(now_secs);
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    log::info!("Ridge Runner starting: seed={seed} runs={runs}");

    let mut highscores = HighScores::load(Path::new(HIGH_SCORE_FILE))?;
    let mut state = GameState::new(seed, ridge_runner::GameplayConfig::default());

    for run in 1..=runs {
        play_one_run(&mut state);

        let summary = &state.run;
        println!(
            "run {run}: score={} coins={} distance={:.0}px",
            summary.score, summary.coins, summary.distance
        );
        if let Some(rank) =
            highscores.add_score(summary.score, summary.coins, summary.distance, now_secs())
        {
            println!("  new high score, rank #{rank}");
        }

        if run < runs {
            if state.phase == RunPhase::GameOver {
                tick(
                    &mut state,
                    &TickInput {
                        jump: false,
                        restart: true,
                    },
                    SIM_DT,
                );
            } else {
                state.restart();
            }
            state.take_events();
        }
    }

    if let Some(top) = highscores.top_score() {
        println!("best score so far: {top}");
    }
    highscores.save(Path::new(HIGH_SCORE_FILE))
}

/// Drive one run to game over (or the tick cap), acting as the engine:
/// overlap detection before each tick, presentation events drained after.
fn play_one_run(state: &mut GameState) {
    let start_ticks = state.time_ticks;
    while state.phase != RunPhase::GameOver {
        if state.time_ticks - start_ticks > MAX_RUN_TICKS {
            log::warn!("run hit the tick cap, abandoning");
            break;
        }

        report_contacts(state);
        let input = TickInput {
            jump: autopilot_wants_jump(state),
            restart: false,
        };
        tick(state, &input, SIM_DT);

        for event in state.take_events() {
            match event {
                GameEvent::CoinCollected { score, .. } => {
                    log::debug!("coin collected, score {score}")
                }
                GameEvent::HazardHit { id } => log::info!("stepped in fire {id}"),
                GameEvent::GameOver { score } => log::info!("run over, score {score}"),
                _ => {}
            }
        }
    }
}

/// The engine's overlap pass: platform contact, coin pickup, fire damage.
fn report_contacts(state: &mut GameState) {
    let px = state.player.pos.x;
    let py = state.player.pos.y;
    let falling = state.player.velocity_y >= 0.0;

    // Landing: player's feet within a platform's top band while descending
    let mut landed_on = None;
    for platform in &state.platforms {
        let top = platform.pos.y - PLATFORM_THICKNESS / 2.0;
        let feet = py + PLAYER_HEIGHT / 2.0;
        let overlaps_x = (px - platform.pos.x).abs() < platform.width / 2.0 + PLAYER_WIDTH / 2.0;
        let in_band = feet >= top && feet <= top + PLATFORM_THICKNESS / 2.0;
        if falling && overlaps_x && in_band {
            landed_on = Some(top);
            break;
        }
    }
    if let Some(top) = landed_on {
        state.on_platform_collision(top);
    }

    let coin_hits: Vec<u32> = state
        .coins
        .iter()
        .filter(|c| {
            (px - c.pos.x).abs() < (COIN_SIZE + PLAYER_WIDTH) / 2.0
                && (py - c.pos.y).abs() < (COIN_SIZE + PLAYER_HEIGHT) / 2.0
        })
        .map(|c| c.id)
        .collect();
    for id in coin_hits {
        state.on_coin_overlap(id);
    }

    // Fires use a reduced collision footprint
    let fire_hit = state
        .fires
        .iter()
        .find(|f| {
            (px - f.pos.x).abs() < (FIRE_WIDTH / 2.0 + PLAYER_WIDTH) / 2.0
                && (py - f.pos.y).abs() < PLAYER_HEIGHT / 2.0
        })
        .map(|f| f.id);
    if let Some(id) = fire_hit {
        state.on_hazard_overlap(id);
    }
}

/// Jump when the ground is about to run out, or mid-air as a last resort.
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.phase != RunPhase::Running {
        return false;
    }
    let px = state.player.pos.x;

    if state.player.touching_down {
        // Ground remaining under our feet, looking slightly ahead
        let lookahead = 90.0;
        let supported = state
            .platforms
            .iter()
            .any(|p| px + lookahead > p.left_edge() && px + lookahead < p.right_edge());
        return !supported;
    }

    // Falling below the corridor with jumps left: burn an air jump
    state.player.velocity_y > 0.0
        && state.player.pos.y > state.config.corridor_max(SCREEN_HEIGHT)
        && state.run.player_jumps > 0
        && state.run.player_jumps < state.config.jumps
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
