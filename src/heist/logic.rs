//! Museum Heist game logic: input, fixed-tick driver, per-frame step, collision.

use super::types::*;
use crate::constants::{MAX_FRAME_DT_MS, SPEED_STEP, SPEED_STEP_INTERVAL};
use log::info;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeistInput {
    /// Any key that is not bound to something else.
    AnyKey,
    /// R or Enter. Restarts from the game-over screen, otherwise acts as `AnyKey`.
    Restart,
    /// Pointer press in world units.
    Click { x: f64, y: f64 },
    /// Esc or Ctrl+C.
    Quit,
}

/// What the driver should do after an input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Apply one input to the session.
pub fn process_input(game: &mut HeistGame, input: HeistInput) -> InputOutcome {
    match input {
        HeistInput::Quit => return InputOutcome::Quit,
        HeistInput::AnyKey => handle_key(game),
        HeistInput::Restart => {
            if game.screen == Screen::GameOver {
                restart(game);
            } else {
                handle_key(game);
            }
        }
        HeistInput::Click { x, y } => {
            if game.screen == Screen::GameOver && game.viewport.restart_icon().contains(x, y) {
                restart(game);
            }
        }
    }
    InputOutcome::Continue
}

fn handle_key(game: &mut HeistGame) {
    match game.screen {
        Screen::Intro => {
            if game.assets_ready {
                restart(game);
            }
        }
        Screen::Playing => {
            // No double jump
            if !game.player.jumping {
                game.player.jumping = true;
                game.player.jump_velocity = game.player.jump_strength;
            }
        }
        Screen::GameOver | Screen::Win => {}
    }
}

fn restart(game: &mut HeistGame) {
    game.start();
    info!(
        "[Heist] Run started (target {} points, speed {})",
        game.target_points, game.game_speed
    );
}

/// Advance the session by `dt_ms` of wall time.
///
/// Steps whole frames of `game.frame_ms` each and keeps the remainder for the
/// next call. Returns true if at least one frame ran.
pub fn tick_heist<R: Rng>(game: &mut HeistGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.is_playing() || game.frame_ms == 0 {
        return false;
    }

    // Clamp so a stall (suspended terminal, slow draw) cannot burst frames
    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
    game.accumulated_time_ms += dt_ms;

    let mut changed = false;
    while game.accumulated_time_ms >= game.frame_ms {
        game.accumulated_time_ms -= game.frame_ms;
        step_frame(game, rng);
        changed = true;

        if !game.is_playing() {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    changed
}

/// Single simulation frame. No-op outside `Playing`.
pub fn step_frame<R: Rng>(game: &mut HeistGame, rng: &mut R) {
    if !game.is_playing() {
        return;
    }

    // 1. Scroll the two-tile background
    game.background_x -= game.game_speed;
    if game.background_x <= -game.viewport.width {
        game.background_x = 0.0;
    }

    // 2. Jump integration (explicit Euler)
    let player = &mut game.player;
    if player.jumping {
        player.y -= player.jump_velocity;
        player.jump_velocity -= player.gravity;
        if player.y >= game.ground_y {
            player.y = game.ground_y;
            player.jumping = false;
        }
    }

    // 3. Score and difficulty ramp
    game.points += 1;
    if game.points % SPEED_STEP_INTERVAL == 0 {
        game.game_speed += SPEED_STEP;
    }

    // 4. Spawning
    game.spawn_counter += 1;
    if game.spawn_counter > game.spawn_threshold {
        let kind = ObstacleKind::random(rng);
        game.spawn_obstacle(kind);
        game.spawn_counter = 0;
        game.spawn_threshold = random_spawn_threshold(rng);
    }

    // 5. Move, collide, despawn
    for obstacle in &mut game.obstacles {
        obstacle.x -= game.game_speed + obstacle.speed_bonus;
    }
    if let Some(hit) = find_collision(&game.player, &game.obstacles) {
        game.screen = Screen::GameOver;
        game.best_points = game.best_points.max(game.points);
        info!(
            "[Heist] Caught by {} at {} points (speed {})",
            hit.name(),
            game.points,
            game.game_speed
        );
    }
    game.obstacles.retain(|o| !o.is_off_screen());

    // 6. Win check runs last and overrides a same-frame collision
    if game.points >= game.target_points {
        game.screen = Screen::Win;
        game.best_points = game.best_points.max(game.points);
        info!("[Heist] Escaped the museum with {} points", game.points);
    }
}

/// True if the player's box overlaps the obstacle's inset box.
pub fn check_collision(player: &Player, obstacle: &Obstacle) -> bool {
    player.hitbox().intersects(&obstacle.hitbox())
}

/// Kind of the first obstacle the player touches, if any.
fn find_collision(player: &Player, obstacles: &[Obstacle]) -> Option<ObstacleKind> {
    obstacles
        .iter()
        .find(|o| check_collision(player, o))
        .map(|o| o.kind)
}
