//! Paddle controller
//!
//! Velocity-based movement with acceleration, friction and wall clamping,
//! followed by the charge-gated actions in fixed order: fire, upgrade, heal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::charge::ActionOutcome;
use super::events::GameEvent;
use super::state::{MatchState, Paddle, Projectile, ProjectileKind, Side};
use crate::consts::*;

/// Named intents for one paddle on one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub upgrade: bool,
    pub heal: bool,
}

impl Paddle {
    /// Accelerate, coast or brake, then move and clamp to the playfield.
    ///
    /// Pressing both directions at once brakes like pressing neither.
    pub fn apply_movement(&mut self, intent: &PaddleIntent) {
        match (intent.up, intent.down) {
            (true, false) => {
                self.velocity = (self.velocity - PADDLE_ACCEL).max(-PADDLE_MAX_SPEED);
            }
            (false, true) => {
                self.velocity = (self.velocity + PADDLE_ACCEL).min(PADDLE_MAX_SPEED);
            }
            _ => self.brake(),
        }

        self.pos.y += self.velocity;

        // Walls absorb momentum
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        } else if self.pos.y > self.max_y() {
            self.pos.y = self.max_y();
            self.velocity = 0.0;
        }
    }

    /// Decelerate toward zero, snapping to exactly zero instead of crossing it
    fn brake(&mut self) {
        if self.velocity > 0.0 {
            self.velocity = (self.velocity - PADDLE_DECEL).max(0.0);
        } else if self.velocity < 0.0 {
            self.velocity = (self.velocity + PADDLE_DECEL).min(0.0);
        }
    }

    /// Build a laser leaving this paddle's face, vertically centred on it
    pub fn laser(&self, id: u32) -> Projectile {
        let x = match self.side {
            Side::Left => self.pos.x + self.width,
            Side::Right => self.pos.x - self.laser_width,
        };
        Projectile {
            id,
            pos: Vec2::new(x, self.pos.y + self.height / 2.0 - self.laser_height / 2.0),
            width: self.laser_width,
            height: self.laser_height,
            speed: LASER_SPEED * self.side.facing(),
            origin: self.side,
            kind: ProjectileKind::Destructive,
            age: 0,
            max_age: LASER_MAX_AGE,
        }
    }
}

/// Advance one paddle by a tick: charge, cooldowns, movement, then actions
pub fn update_paddle(
    state: &mut MatchState,
    side: Side,
    intent: &PaddleIntent,
    events: &mut Vec<GameEvent>,
) {
    let paddle = state.paddle_mut(side);
    paddle.regen_charge();
    paddle.tick_cooldowns();
    paddle.apply_movement(intent);

    let mut shot = None;
    if intent.fire && paddle.try_fire().performed() {
        shot = Some(paddle.laser(0));
        events.push(GameEvent::Fire {
            pos: Vec2::new(paddle.face_x(), paddle.center().y),
            side,
        });
    }

    if intent.upgrade {
        if let ActionOutcome::Upgraded { level } = paddle.try_upgrade() {
            events.push(GameEvent::Upgrade {
                pos: paddle.center(),
                side,
                level,
            });
        }
    }

    if intent.heal {
        if let ActionOutcome::Healed { segment } = paddle.try_heal() {
            let pos = Vec2::new(paddle.center().x, paddle.segment_center(segment).y);
            events.push(GameEvent::Heal { pos, segment, side });
        }
    }

    if let Some(mut projectile) = shot {
        projectile.id = state.next_entity_id();
        state.projectiles.push(projectile);
    }
}
