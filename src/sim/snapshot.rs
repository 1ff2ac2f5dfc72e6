//! Read-only view of a match for presentation layers
//!
//! Renderers draw from a snapshot taken after the tick completes, so they
//! can never observe or cause a half-updated state.

use glam::Vec2;
use serde::Serialize;

use super::state::{MatchState, Overlay, Paddle, Side};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub segments: [bool; PADDLE_SEGMENTS],
    pub charge: f32,
    /// Charge as a 0-1 fraction of a full meter
    pub charge_fraction: f32,
    /// Meter is full (upgrade/heal available)
    pub charged: bool,
    pub fire_cooldown: u32,
    pub heal_cooldown: u32,
    pub upgrade_cooldown: u32,
    pub laser_level: u32,
    pub score: u32,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            side: paddle.side,
            pos: paddle.pos,
            size: Vec2::new(paddle.width, paddle.height),
            segments: paddle.segments,
            charge: paddle.charge,
            charge_fraction: paddle.charge / MAX_CHARGE,
            charged: paddle.is_fully_charged(),
            fire_cooldown: paddle.fire_cooldown,
            heal_cooldown: paddle.heal_cooldown,
            upgrade_cooldown: paddle.upgrade_cooldown,
            laser_level: paddle.laser_level,
            score: paddle.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub size: Vec2,
    pub origin: Side,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub left: PaddleView,
    pub right: PaddleView,
    pub ball_pos: Vec2,
    pub ball_size: f32,
    pub projectiles: Vec<ProjectileView>,
    pub overlay: Overlay,
}

impl MatchState {
    /// Owned copy of everything a renderer needs for this frame
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            tick: self.time_ticks,
            left: PaddleView::from(&self.left),
            right: PaddleView::from(&self.right),
            ball_pos: self.ball.pos,
            ball_size: self.ball.size,
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    size: Vec2::new(p.width, p.height),
                    origin: p.origin,
                    age: p.age,
                })
                .collect(),
            overlay: self.overlay.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = MatchState::new(5);
        state.left.charge = MAX_CHARGE / 2.0;
        state.right.segments[0] = false;
        let snap = state.snapshot();
        assert!((snap.left.charge_fraction - 0.5).abs() < 1e-6);
        assert!(!snap.left.charged);
        assert!(snap.right.charged);
        assert_eq!(snap.right.segments, [false, true, true, true]);
        assert_eq!(snap.ball_pos, state.ball.pos);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = MatchState::new(5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"charge_fraction\":1.0"));
        assert!(json.contains("\"segments\":[true,true,true,true]"));
    }
}
