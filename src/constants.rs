// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS, one display refresh
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 8;

// Viewport (world units)
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;
pub const GROUND_RATIO: f64 = 0.7;

// Player
pub const PLAYER_X: f64 = 80.0;
pub const PLAYER_SIZE: f64 = 70.0;
pub const GRAVITY: f64 = 0.7;
pub const JUMP_STRENGTH: f64 = 16.0;

// Progression
pub const TARGET_POINTS: u32 = 2000;
pub const INITIAL_SPEED: f64 = 12.0;
pub const SPEED_STEP: f64 = 0.5;
pub const SPEED_STEP_INTERVAL: u32 = 200;

// Spawning (frames between obstacles, inclusive range)
pub const SPAWN_THRESHOLD_MIN: u32 = 50;
pub const SPAWN_THRESHOLD_MAX: u32 = 120;

// Restart icon on the game-over screen, centred horizontally
pub const RESTART_ICON_HALF_WIDTH: f64 = 40.0;
pub const RESTART_ICON_TOP: f64 = 350.0;
pub const RESTART_ICON_SIZE: f64 = 80.0;
