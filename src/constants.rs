//! Gameplay constants.
//!
//! Layout values are in canvas pixels for the reference 1600x900 canvas; the
//! ones that depend on the actual canvas size are computed from
//! [`ScreenSize`](crate::resources::screensize::ScreenSize) at spawn time.
//! Timing values are in simulation ticks.

// World capacity
pub const MAX_ENTITIES: usize = 20;
pub const POOL_SIZE: usize = 4;
pub const STARTING_LIVES: usize = 3;

// Difficulty ramp: every this many ticks the game gets harder.
pub const DIFFICULTY_PERIOD: u64 = 1000;

// Player vertical positions
pub const JUMP_FROM_GROUND_Y: f32 = 400.0;
pub const JUMP_FROM_RAIL_Y: f32 = 370.0;
pub const IDLE_RIDE_Y: f32 = 420.0;
pub const SLIDING_ON_RAIL_Y: f32 = 370.0;
pub const PLAYER_DEFAULT_X: f32 = 150.0;
pub const PLAYER_DEFAULT_Y: f32 = 420.0;
pub const PLAYER_CROUCH_Y: f32 = 470.0;
pub const RAIL_EXIT_DISTANCE: f32 = 300.0;
pub const PLAYER_MIN_X: f32 = 0.0;
pub const PLAYER_RIGHT_MARGIN: f32 = 200.0;
pub const PLAYER_STEP: f32 = 5.0;
pub const PLAYER_NAME: &str = "Bober";

// Player poses (width, height)
pub const PLAYER_DEFAULT_SIZE: (f32, f32) = (215.0, 255.0);
pub const PLAYER_ON_RAIL_SIZE: (f32, f32) = (215.0, 255.0);
pub const PLAYER_IN_JUMP_SIZE: (f32, f32) = (215.0, 185.0);
pub const PLAYER_CROUCH_SIZE: (f32, f32) = (270.0, 160.0);

// Obstacles
pub const BOX_WIDTH: f32 = 75.0;
pub const BOX_HEIGHT: f32 = 75.0;
pub const BOX_BROKEN_GROWTH: f32 = 20.0;
pub const RAIL_WIDTH: f32 = 500.0;
pub const RAIL_HEIGHT: f32 = 90.0;
pub const RAIL_COLLIDER_TRIM: f32 = 100.0;
pub const GRID_WIDTH: f32 = 220.0;
pub const GRID_HEIGHT: f32 = 340.0;
pub const SCORE_POINT_WIDTH: f32 = 1.0;

pub const GRID_POSITION_Y: f32 = 345.0;
pub const RAIL_POSITION_Y: f32 = 535.0;
pub const BOX_POSITION_Y: f32 = 545.0;

// Pickup offsets from the obstacle's left edge
pub const BOX_PICKUP_OFFSET: f32 = 300.0;
pub const GRID_PICKUP_OFFSET: f32 = 500.0;
pub const RAIL_PICKUP_OFFSET: f32 = 550.0;

// HUD
pub const HEART_SIZE: f32 = 60.0;
pub const HEART_POSITION_Y: f32 = 80.0;
pub const HEART_OFFSETS_FROM_RIGHT: [f32; STARTING_LIVES] = [350.0, 260.0, 170.0];
pub const SCORE_LABEL_FROM_RIGHT: f32 = 300.0;
pub const SCORE_LABEL_FROM_BOTTOM: f32 = 80.0;
pub const SCORE_FONT_SIZE: i32 = 40;
pub const RESULT_POSITION_X: f32 = 600.0;
pub const RESULT_POSITION_Y: f32 = 650.0;
pub const RESULT_FONT_SIZE: i32 = 50;

// Scrolling
pub const BACKGROUND_SPEED: i32 = -2;

// Obstacle generator baseline
pub const INITIAL_SPAWN_RATE: u32 = 350;
pub const INITIAL_SPAWN_DIVISOR: u32 = 3;
pub const INITIAL_OBSTACLE_SPEED: i32 = -3;
pub const SPAWN_ROLL_RANGE: u32 = 1000;
pub const SPAWN_ROLL_BOX: u32 = 333;
pub const SPAWN_ROLL_GRID: u32 = 666;

// Jump tuning baseline and the easier values used after the first checkpoint
pub const JUMP_HEIGHT: f32 = 120.0;
pub const JUMP_DURATION: f32 = 120.0;
pub const JUMP_ROTATION_SPEED: f32 = 3.0;
pub const OLLIE_UP_SPEED: f32 = -1.2;
pub const OLLIE_DOWN_SPEED: f32 = 0.4;
pub const JUMP_DIVISOR: f32 = 5.0;
pub const EASED_JUMP_DURATION: f32 = 95.0;
pub const EASED_ROTATION_SPEED: f32 = 3.3;
pub const OLLIE_PHASE_SPLIT: f32 = 0.15;

// Grace window
pub const GRACE_TICKS: u32 = 150;
pub const GRACE_TICKS_LATE: u32 = 100;
pub const GRACE_BLINK_MODULUS: u32 = 20;

// Draw order
pub const Z_BACKGROUND: i32 = 0;
pub const Z_OBSTACLE: i32 = 1;
pub const Z_PLAYER: i32 = 2;
pub const Z_GRID_FLAG: i32 = 3;
pub const Z_HUD: i32 = 4;

/// Texture keys understood by the host renderer.
pub mod tex {
    pub const BACKGROUND: &str = "background";
    pub const START: &str = "start";
    pub const GAME_OVER: &str = "game-over";
    pub const HIGH_SCORES: &str = "high-scores";
    pub const BOBER_STAND: &str = "bober-stand";
    pub const BOBER_CROUCH: &str = "bober-crouch";
    pub const BOBER_JUMP: &str = "bober-jump";
    pub const BOBER_FLIP: &str = "bober-flip";
    pub const BOBER_SLIDE: &str = "bober-rail";
    pub const BOX: &str = "box";
    pub const BOX_BROKEN: &str = "box-broken";
    pub const RAIL: &str = "rail";
    pub const GRID: &str = "grid";
    pub const GRID_STICK: &str = "grid-stick";
    pub const GRID_BROKEN: &str = "grid-broken";
    pub const HEART: &str = "heart";

    /// Every key with the file it is loaded from.
    pub const ALL: [(&str, &str); 16] = [
        (BACKGROUND, "./assets/background.png"),
        (START, "./assets/start.png"),
        (GAME_OVER, "./assets/game-over.png"),
        (HIGH_SCORES, "./assets/high-scores.png"),
        (BOBER_STAND, "./assets/bober-stand.png"),
        (BOBER_CROUCH, "./assets/bober-luzny.png"),
        (BOBER_JUMP, "./assets/bober-jump.png"),
        (BOBER_FLIP, "./assets/bober-flip.png"),
        (BOBER_SLIDE, "./assets/bober-rail.png"),
        (BOX, "./assets/box.png"),
        (BOX_BROKEN, "./assets/box-broken.png"),
        (RAIL, "./assets/rail.png"),
        (GRID, "./assets/grid.png"),
        (GRID_STICK, "./assets/grid-stick.png"),
        (GRID_BROKEN, "./assets/grid-broken.png"),
        (HEART, "./assets/heart.png"),
    ];
}
