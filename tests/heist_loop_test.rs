//! Integration test: full runs through the public API.
//!
//! Drives sessions frame by frame with a seeded RNG, the way the binary does
//! with wall-clock time, and checks the screen machine end to end.

use museum_heist::constants::{FRAME_MS, SPAWN_THRESHOLD_MIN};
use museum_heist::heist::{process_input, step_frame, tick_heist, ObstacleKind, Viewport};
use museum_heist::{GameConfig, HeistGame, HeistInput, Screen};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn started(config: &GameConfig, seed: u64) -> (HeistGame, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = config.new_game(&mut rng);
    game.assets_ready = true;
    process_input(&mut game, HeistInput::AnyKey);
    assert_eq!(game.screen, Screen::Playing);
    (game, rng)
}

// =============================================================================
// Screen machine
// =============================================================================

#[test]
fn test_idle_runner_is_eventually_caught() {
    let (mut game, mut rng) = started(&GameConfig::default(), 11);

    let mut frames = 0;
    while game.screen == Screen::Playing {
        step_frame(&mut game, &mut rng);
        frames += 1;
        assert!(frames < 5_000, "idle runner should not survive this long");
    }

    // Lasers hang above a standing thief, so only guards and sensors catch it
    assert_eq!(game.screen, Screen::GameOver);
    assert!(game.points > SPAWN_THRESHOLD_MIN);
    assert_eq!(game.best_points, game.points);
}

#[test]
fn test_short_target_wins_before_first_spawn() {
    let config = GameConfig {
        target_points: 40,
        ..Default::default()
    };
    let (mut game, mut rng) = started(&config, 3);

    for _ in 0..40 {
        step_frame(&mut game, &mut rng);
    }
    assert_eq!(game.screen, Screen::Win);
    assert_eq!(game.points, 40);
    assert!(game.obstacles.is_empty());
}

#[test]
fn test_exactly_one_screen_and_terminal_states_stick() {
    for seed in 0..20 {
        let (mut game, mut rng) = started(&GameConfig::default(), seed);
        let mut ended = false;

        for _ in 0..3_000 {
            let before = game.points;
            step_frame(&mut game, &mut rng);
            match game.screen {
                Screen::Playing => {
                    assert!(!ended);
                    assert_eq!(game.points, before + 1);
                }
                Screen::GameOver | Screen::Win => {
                    if ended {
                        assert_eq!(game.points, before, "no simulation after the run ends");
                    } else {
                        ended = true;
                        assert_eq!(game.points, before + 1);
                    }
                }
                Screen::Intro => panic!("a run never returns to the intro"),
            }
        }
    }
}

#[test]
fn test_restart_after_game_over_resets_run() {
    let (mut game, mut rng) = started(&GameConfig::default(), 8);
    game.spawn_threshold = u32::MAX;
    for _ in 0..250 {
        step_frame(&mut game, &mut rng);
    }
    assert!(game.game_speed > 12.0);

    // A guard that lands right on the standing thief this frame
    game.spawn_obstacle(ObstacleKind::Cop);
    let bonus = game.obstacles[0].speed_bonus;
    let landing_x = game.player.x + game.game_speed + bonus;
    game.obstacles[0].x = landing_x;
    step_frame(&mut game, &mut rng);
    assert_eq!(game.screen, Screen::GameOver);
    assert_eq!(game.best_points, 251);

    let icon = game.viewport.restart_icon();
    process_input(
        &mut game,
        HeistInput::Click {
            x: icon.x + icon.width / 2.0,
            y: icon.y + icon.height / 2.0,
        },
    );

    assert_eq!(game.screen, Screen::Playing);
    assert_eq!(game.points, 0);
    assert!((game.game_speed - 12.0).abs() < f64::EPSILON);
    assert!(game.obstacles.is_empty());
    assert!(!game.player.jumping);
    assert!(game.player.jump_velocity.abs() < f64::EPSILON);
    assert!((game.player.y - game.ground_y).abs() < f64::EPSILON);
}

// =============================================================================
// Physics and obstacles
// =============================================================================

#[test]
fn test_player_never_below_ground_while_jumping() {
    let (mut game, mut rng) = started(&GameConfig::default(), 21);
    game.spawn_threshold = u32::MAX;

    for frame in 0..600 {
        if frame % 37 == 0 {
            process_input(&mut game, HeistInput::AnyKey);
        }
        let was_jumping = game.player.jumping;
        let next_y = game.player.y - game.player.jump_velocity;
        step_frame(&mut game, &mut rng);

        assert!(game.player.y <= game.ground_y);
        if was_jumping {
            assert_eq!(game.player.jumping, next_y < game.ground_y);
        }
    }
}

#[test]
fn test_each_obstacle_removed_exactly_once() {
    let (mut game, mut rng) = started(&GameConfig::default(), 5);
    game.spawn_threshold = u32::MAX;

    // Lasers never touch a standing thief, so the run cannot end early
    for i in 1..=4 {
        game.spawn_obstacle(ObstacleKind::Laser);
        if let Some(laser) = game.obstacles.last_mut() {
            laser.x = 1280.0 + i as f64 * 300.0;
        }
    }

    let mut removed = 0;
    let mut previous = game.obstacles.len();
    for _ in 0..400 {
        step_frame(&mut game, &mut rng);
        assert_eq!(game.screen, Screen::Playing);
        for o in &game.obstacles {
            assert!(o.x + o.width >= 0.0, "off-screen obstacle still live");
        }
        removed += previous - game.obstacles.len();
        previous = game.obstacles.len();
    }
    assert_eq!(removed, 4);
    assert!(game.obstacles.is_empty());
}

#[test]
fn test_tick_matches_frame_count() {
    let (mut game, mut rng) = started(&GameConfig::default(), 13);
    game.spawn_threshold = u32::MAX;

    for _ in 0..10 {
        tick_heist(&mut game, 50, &mut rng);
    }
    assert_eq!(game.points as u64, 500 / FRAME_MS);
    assert_eq!(game.accumulated_time_ms, 500 % FRAME_MS);
}

#[test]
fn test_custom_viewport_moves_spawn_edge() {
    let config = GameConfig {
        viewport_width: 640.0,
        viewport_height: 480.0,
        ..Default::default()
    };
    let (mut game, _rng) = started(&config, 1);
    assert_eq!(
        game.viewport,
        Viewport {
            width: 640.0,
            height: 480.0
        }
    );
    game.spawn_obstacle(ObstacleKind::Sensor);
    assert!((game.obstacles[0].x - 640.0).abs() < f64::EPSILON);
    assert!((game.ground_y - 336.0).abs() < 1e-9);
}
