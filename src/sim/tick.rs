//! Fixed-step simulation tick
//!
//! Core game loop that advances the match deterministically: paddles, then
//! projectiles, then the ball, in that order, once per tick.

use serde::{Deserialize, Serialize};

use super::ball::update_ball;
use super::events::GameEvent;
use super::paddle::{PaddleIntent, update_paddle};
use super::projectile::update_projectiles;
use super::state::{MatchState, Side};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
    /// Dump both charge meters to the log
    pub debug: bool,
}

impl TickInput {
    pub fn intent(&self, side: Side) -> &PaddleIntent {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Advance the match by one tick and return what happened, in order
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ticks += 1;
    state.overlay.decay();

    for side in [Side::Left, Side::Right] {
        update_paddle(state, side, input.intent(side), &mut events);
    }

    if input.debug {
        log::debug!(
            "Left charge: {} Right charge: {} Laser cost: {} Full charge: {}",
            state.left.charge,
            state.right.charge,
            FIRE_COST,
            MAX_CHARGE
        );
    }

    update_projectiles(state, &mut events);
    update_ball(state, &mut events);

    events
}

/// By-value form of [`tick`] for drivers that thread state through
pub fn step(mut state: MatchState, input: &TickInput) -> (MatchState, Vec<GameEvent>) {
    let events = tick(&mut state, input);
    (state, events)
}
