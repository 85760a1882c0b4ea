//! Museum Heist data structures.
//!
//! A side-scrolling runner: the thief sprints through the museum and jumps
//! over guards, motion sensors and laser mazes until the points target is hit.
//! All positions are in world units (a 1280x720 canvas by default). `y` grows
//! downward, so a jump makes the player's `y` smaller.

use crate::constants::*;
use rand::Rng;

/// Which screen is showing. Only `Playing` advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    GameOver,
    Win,
}

/// Axis-aligned box used for both drawing and collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap on both axes. Touching edges do not count.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Inclusive point test, used for the restart icon.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Per-kind margins applied to the sprite box to get the collision box.
/// `width`/`height` are deltas, usually negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inset {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The player-controlled thief.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    /// Top edge. Equal to `ground_y` when standing.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub jumping: bool,
    /// Upward speed in units/frame (positive = rising).
    pub jump_velocity: f64,
    pub gravity: f64,
    pub jump_strength: f64,
}

impl Player {
    pub fn new(ground_y: f64) -> Self {
        Self {
            x: PLAYER_X,
            y: ground_y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            jumping: false,
            jump_velocity: 0.0,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    /// Put the player back on the ground, at rest.
    pub fn reset(&mut self, ground_y: f64) {
        self.y = ground_y;
        self.jumping = false;
        self.jump_velocity = 0.0;
    }
}

/// Obstacle archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Security guard. Big, and walks toward the thief.
    Cop,
    /// Motion sensor zone.
    Sensor,
    /// Laser maze hanging above the floor.
    Laser,
}

/// Geometry and behaviour of one obstacle kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSpec {
    pub width: f64,
    pub height: f64,
    /// Top edge relative to the ground line (negative = above it).
    pub y_offset: f64,
    pub inset: Inset,
    /// Extra leftward speed on top of the scroll speed.
    pub speed_bonus: f64,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Cop, ObstacleKind::Sensor, ObstacleKind::Laser];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cop => "cop",
            Self::Sensor => "sensor",
            Self::Laser => "laser",
        }
    }

    /// Sizes are scaled from the player box for the guard and the laser.
    pub fn spec(&self) -> ObstacleSpec {
        match self {
            Self::Cop => ObstacleSpec {
                width: PLAYER_SIZE * 3.0,
                height: PLAYER_SIZE * 3.0,
                y_offset: -100.0,
                inset: Inset {
                    x: 30.0,
                    y: 30.0,
                    width: -60.0,
                    height: -60.0,
                },
                speed_bonus: 2.0,
            },
            Self::Sensor => ObstacleSpec {
                width: 250.0,
                height: 250.0,
                y_offset: -100.0,
                inset: Inset {
                    x: 30.0,
                    y: 50.0,
                    width: -60.0,
                    height: -80.0,
                },
                speed_bonus: 0.0,
            },
            Self::Laser => ObstacleSpec {
                width: 80.0,
                height: 100.0,
                y_offset: -PLAYER_SIZE * 2.2,
                inset: Inset {
                    x: 20.0,
                    y: 10.0,
                    width: -40.0,
                    height: -20.0,
                },
                speed_bonus: 0.0,
            },
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A live obstacle scrolling toward the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed_bonus: f64,
}

impl Obstacle {
    /// Build an obstacle of `kind` with its left edge at `x`.
    pub fn new(kind: ObstacleKind, x: f64, ground_y: f64) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            x,
            y: ground_y + spec.y_offset,
            width: spec.width,
            height: spec.height,
            speed_bonus: spec.speed_bonus,
        }
    }

    /// Drawn sprite box.
    pub fn bounds(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    /// Sprite box shrunk by the kind's inset.
    pub fn hitbox(&self) -> Hitbox {
        let inset = self.kind.spec().inset;
        Hitbox::new(
            self.x + inset.x,
            self.y + inset.y,
            self.width + inset.width,
            self.height + inset.height,
        )
    }

    /// True once the right edge has scrolled past the left viewport edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Size of the drawing surface in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn ground_y(&self) -> f64 {
        self.height * GROUND_RATIO
    }

    /// Rectangle of the restart icon on the game-over screen.
    pub fn restart_icon(&self) -> Hitbox {
        Hitbox::new(
            self.width / 2.0 - RESTART_ICON_HALF_WIDTH,
            RESTART_ICON_TOP,
            RESTART_ICON_HALF_WIDTH * 2.0,
            RESTART_ICON_SIZE,
        )
    }
}

/// Whole session: screen, player, obstacles, scoring and frame timing.
#[derive(Debug, Clone)]
pub struct HeistGame {
    pub screen: Screen,
    /// Set once the asset batch has loaded. Intro ignores input until then.
    pub assets_ready: bool,

    // -- World --
    pub viewport: Viewport,
    pub ground_y: f64,
    pub player: Player,
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,

    // -- Scoring --
    pub points: u32,
    pub target_points: u32,
    /// Scroll speed in units/frame.
    pub game_speed: f64,
    pub initial_speed: f64,
    /// Best score seen by this process. Not saved.
    pub best_points: u32,

    // -- Scrolling and spawning --
    /// Left edge of the first background tile, in (-width, 0].
    pub background_x: f64,
    pub spawn_counter: u32,
    pub spawn_threshold: u32,

    // -- Timing --
    pub frame_ms: u64,
    /// Leftover wall time not yet consumed by a frame (milliseconds).
    pub accumulated_time_ms: u64,
}

impl HeistGame {
    /// New session on the intro screen with default tuning.
    pub fn new<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        Self::with_tuning(viewport, TARGET_POINTS, INITIAL_SPEED, FRAME_MS, rng)
    }

    pub fn with_tuning<R: Rng>(
        viewport: Viewport,
        target_points: u32,
        initial_speed: f64,
        frame_ms: u64,
        rng: &mut R,
    ) -> Self {
        let ground_y = viewport.ground_y();
        Self {
            screen: Screen::Intro,
            assets_ready: false,

            viewport,
            ground_y,
            player: Player::new(ground_y),
            obstacles: Vec::new(),

            points: 0,
            target_points,
            game_speed: initial_speed,
            initial_speed,
            best_points: 0,

            background_x: 0.0,
            spawn_counter: 0,
            spawn_threshold: random_spawn_threshold(rng),

            frame_ms,
            accumulated_time_ms: 0,
        }
    }

    /// Reset every per-run field and switch to `Playing`.
    ///
    /// The spawn counter and threshold carry over between runs.
    pub fn start(&mut self) {
        self.screen = Screen::Playing;
        self.points = 0;
        self.game_speed = self.initial_speed;
        self.obstacles.clear();
        self.background_x = 0.0;
        self.ground_y = self.viewport.ground_y();
        self.player.reset(self.ground_y);
        self.accumulated_time_ms = 0;
    }

    /// Append a new obstacle at the right edge of the viewport.
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) {
        self.obstacles
            .push(Obstacle::new(kind, self.viewport.width, self.ground_y));
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }

    /// Fraction of the points target reached, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.target_points == 0 {
            return 1.0;
        }
        (self.points as f64 / self.target_points as f64).min(1.0)
    }
}

/// Uniform integer in the inclusive spawn range.
pub fn random_spawn_threshold<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(SPAWN_THRESHOLD_MIN..=SPAWN_THRESHOLD_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = HeistGame::new(Viewport::default(), &mut rng());
        assert_eq!(game.screen, Screen::Intro);
        assert!(!game.assets_ready);
        assert_eq!(game.points, 0);
        assert_eq!(game.target_points, 2000);
        assert!((game.game_speed - 12.0).abs() < f64::EPSILON);
        assert!((game.ground_y - 504.0).abs() < 1e-9);
        assert!(game.obstacles.is_empty());
        assert!(!game.player.jumping);
        assert!((game.player.y - game.ground_y).abs() < f64::EPSILON);
        assert!((SPAWN_THRESHOLD_MIN..=SPAWN_THRESHOLD_MAX).contains(&game.spawn_threshold));
    }

    #[test]
    fn test_obstacle_table() {
        let cop = ObstacleKind::Cop.spec();
        assert!((cop.width - 210.0).abs() < f64::EPSILON);
        assert!((cop.height - 210.0).abs() < f64::EPSILON);
        assert!((cop.speed_bonus - 2.0).abs() < f64::EPSILON);

        let sensor = ObstacleKind::Sensor.spec();
        assert!((sensor.width - 250.0).abs() < f64::EPSILON);
        assert!((sensor.inset.y - 50.0).abs() < f64::EPSILON);
        assert!((sensor.inset.height - (-80.0)).abs() < f64::EPSILON);
        assert!(sensor.speed_bonus.abs() < f64::EPSILON);

        let laser = ObstacleKind::Laser.spec();
        assert!((laser.width - 80.0).abs() < f64::EPSILON);
        assert!((laser.height - 100.0).abs() < f64::EPSILON);
        assert!((laser.y_offset - (-154.0)).abs() < 1e-9);
    }

    #[test]
    fn test_obstacle_hitbox_applies_inset() {
        let obs = Obstacle::new(ObstacleKind::Laser, 80.0, 500.0);
        let hb = obs.hitbox();
        assert!((hb.x - 100.0).abs() < f64::EPSILON);
        assert!((hb.y - (500.0 - 154.0 + 10.0)).abs() < 1e-9);
        assert!((hb.width - 40.0).abs() < f64::EPSILON);
        assert!((hb.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hitbox_edges_do_not_touch() {
        let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);
        let b = Hitbox::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Hitbox::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_off_screen_uses_right_edge() {
        let mut obs = Obstacle::new(ObstacleKind::Laser, -80.0, 500.0);
        assert!(!obs.is_off_screen(), "right edge exactly at 0 is still visible");
        obs.x = -80.5;
        assert!(obs.is_off_screen());
    }

    #[test]
    fn test_restart_icon_rect() {
        let icon = Viewport::default().restart_icon();
        assert!(icon.contains(600.0, 350.0));
        assert!(icon.contains(680.0, 430.0));
        assert!(!icon.contains(599.0, 400.0));
        assert!(!icon.contains(640.0, 431.0));
    }

    #[test]
    fn test_start_resets_run_state() {
        let mut game = HeistGame::new(Viewport::default(), &mut rng());
        game.points = 777;
        game.game_speed = 20.0;
        game.background_x = -300.0;
        game.player.jumping = true;
        game.player.y = 100.0;
        game.player.jump_velocity = 5.0;
        game.spawn_obstacle(ObstacleKind::Cop);
        game.screen = Screen::GameOver;

        game.start();

        assert_eq!(game.screen, Screen::Playing);
        assert_eq!(game.points, 0);
        assert!((game.game_speed - 12.0).abs() < f64::EPSILON);
        assert!(game.obstacles.is_empty());
        assert!(game.background_x.abs() < f64::EPSILON);
        assert!(!game.player.jumping);
        assert!(game.player.jump_velocity.abs() < f64::EPSILON);
        assert!((game.player.y - game.ground_y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_places_obstacle_at_right_edge() {
        let mut game = HeistGame::new(Viewport::default(), &mut rng());
        game.spawn_obstacle(ObstacleKind::Sensor);
        let obs = &game.obstacles[0];
        assert!((obs.x - 1280.0).abs() < f64::EPSILON);
        assert!((obs.y - (game.ground_y - 100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_random_kind_covers_all_kinds() {
        let mut rng = rng();
        let mut seen = [false; 3];
        for _ in 0..200 {
            match ObstacleKind::random(&mut rng) {
                ObstacleKind::Cop => seen[0] = true,
                ObstacleKind::Sensor => seen[1] = true,
                ObstacleKind::Laser => seen[2] = true,
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
