//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only (owned by `MatchState`)
//! - Stable iteration order (left before right, projectiles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod charge;
pub mod collision;
pub mod events;
pub mod paddle;
pub mod projectile;
pub mod segments;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use charge::ActionOutcome;
pub use collision::{PaddleContact, aabb_overlap, ball_paddle_contact, span_overlaps_segment};
pub use events::{BounceSurface, GameEvent, ScoreReason, Wall};
pub use paddle::PaddleIntent;
pub use segments::HitReport;
pub use snapshot::{MatchSnapshot, PaddleView, ProjectileView};
pub use state::{
    Ball, Banner, FlashCause, MatchState, Overlay, Paddle, Projectile, ProjectileKind,
    ScreenFlash, Side,
};
pub use tick::{TickInput, step, tick};
