//! Laser Pong - two-player Pong with destructible paddles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, lasers, charge economy)
//! - `input`: Key bindings mapped to per-paddle intents
//! - `audio`: Sound cues derived from simulation events
//! - `settings`: Driver and presentation preferences

pub mod audio;
pub mod input;
pub mod settings;
pub mod sim;

pub use input::{InputMapper, KeyBindings};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per displayed frame)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle geometry - only y changes during play
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    /// Gap between a paddle and its side of the playfield
    pub const PADDLE_EDGE_OFFSET: f32 = 20.0;
    pub const PADDLE_SEGMENTS: usize = 4;
    pub const SEGMENT_HEIGHT: f32 = PADDLE_HEIGHT / PADDLE_SEGMENTS as f32;

    /// Paddle motion (pixels per tick, pixels per tick²)
    pub const PADDLE_MAX_SPEED: f32 = 12.0;
    pub const PADDLE_ACCEL: f32 = 0.5;
    pub const PADDLE_DECEL: f32 = 0.3;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_VEL: (f32, f32) = (3.0, 3.0);
    /// Horizontal serve speed after a goal (sign is random)
    pub const BALL_SERVE_SPEED: f32 = 3.0;
    /// Vertical serve speed range after a goal
    pub const BALL_SERVE_SPREAD: f32 = 2.0;
    /// Paddle deflection maps hit position onto [-MAX, +MAX]
    pub const BALL_MAX_DEFLECTION: f32 = 5.0;

    /// Laser defaults
    pub const LASER_WIDTH: f32 = 30.0;
    pub const LASER_HEIGHT: f32 = 10.0;
    pub const LASER_SPEED: f32 = 6.0;
    pub const LASER_MAX_AGE: u32 = 200;
    pub const LASER_UPGRADE_FACTOR: f32 = 1.2;

    /// Charge economy (ticks to fully recharge = max charge)
    pub const MAX_CHARGE: f32 = 1200.0;
    pub const FIRE_COST: f32 = MAX_CHARGE / 4.0;
    pub const FIRE_COOLDOWN: u32 = 30;
    pub const HEAL_COOLDOWN: u32 = 20;
    pub const UPGRADE_COOLDOWN: u32 = 20;

    /// Scoring
    pub const SEGMENT_SCORE: u32 = 2;
    pub const DESTRUCTION_BONUS: u32 = 50;
    pub const GOAL_SCORE: u32 = 10;

    /// Overlay timers (ticks)
    pub const FLASH_TICKS: u32 = 30;
    pub const BANNER_TICKS: u32 = 120;
    pub const DESTRUCTION_BANNER: &str = "DESTROY +50!";
}
