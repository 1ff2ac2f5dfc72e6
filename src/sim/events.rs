//! Events emitted by a tick for audio/visual collaborators
//!
//! The simulation never plays sounds or spawns particles itself; it reports
//! what happened and the presentation layer decides how to show it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;

/// Horizontal wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Surface the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceSurface {
    Wall(Wall),
    Paddle(Side),
}

/// What earned the points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreReason {
    /// Laser broke one of the opponent's segments
    Segment,
    /// Laser hit left the opponent with no intact segment
    DestructionBonus,
    /// Ball left the field past the opponent
    Goal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Bounce {
        pos: Vec2,
        surface: BounceSurface,
    },
    Fire {
        pos: Vec2,
        side: Side,
    },
    Upgrade {
        pos: Vec2,
        side: Side,
        level: u32,
    },
    Heal {
        pos: Vec2,
        segment: usize,
        side: Side,
    },
    /// One segment of `side`'s paddle broke. `lead` marks the first segment
    /// broken by a given hit so a single destruction cue plays per hit.
    SegmentDestroyed {
        pos: Vec2,
        segment: usize,
        side: Side,
        lead: bool,
    },
    /// `side`'s paddle lost its last segment and was refilled
    PaddleFullyDestroyed {
        side: Side,
        pos: Vec2,
        bonus: u32,
    },
    Score {
        side: Side,
        delta: u32,
        total: u32,
        reason: ScoreReason,
    },
    BallReset {
        pos: Vec2,
        vel: Vec2,
    },
}

impl GameEvent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Bounce { .. } => "bounce",
            GameEvent::Fire { .. } => "fire",
            GameEvent::Upgrade { .. } => "upgrade",
            GameEvent::Heal { .. } => "heal",
            GameEvent::SegmentDestroyed { .. } => "segmentDestroyed",
            GameEvent::PaddleFullyDestroyed { .. } => "paddleFullyDestroyed",
            GameEvent::Score { .. } => "score",
            GameEvent::BallReset { .. } => "ballReset",
        }
    }
}
