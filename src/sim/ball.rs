//! Ball physics: integration, bounces, goals and serve

use glam::Vec2;
use rand::Rng;

use super::collision::{ball_paddle_contact, deflection};
use super::events::{BounceSurface, GameEvent, ScoreReason, Wall};
use super::state::{FlashCause, MatchState, Paddle, Side};
use crate::consts::*;

/// Advance the ball one tick and resolve walls, paddles and goals
pub fn update_ball(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top and bottom walls: any contact flips vertical speed
    let floor = CANVAS_HEIGHT - ball.size;
    let wall = if ball.pos.y <= 0.0 {
        Some(Wall::Top)
    } else if ball.pos.y >= floor {
        Some(Wall::Bottom)
    } else {
        None
    };
    if let Some(wall) = wall {
        ball.vel.y = -ball.vel.y;
        let y = match wall {
            Wall::Top => 0.0,
            Wall::Bottom => CANVAS_HEIGHT,
        };
        events.push(GameEvent::Bounce {
            pos: Vec2::new(ball.pos.x, y),
            surface: BounceSurface::Wall(wall),
        });
    }

    bounce_off_paddle(state, Side::Left, events);
    bounce_off_paddle(state, Side::Right, events);

    // Goals
    if state.ball.pos.x <= 0.0 {
        score_goal(state, Side::Right, events);
    } else if state.ball.pos.x + state.ball.size >= CANVAS_WIDTH {
        score_goal(state, Side::Left, events);
    }
}

/// Reflect the ball off `side`'s paddle if it touches an intact segment.
/// A broken segment lets the ball straight through.
fn bounce_off_paddle(state: &mut MatchState, side: Side, events: &mut Vec<GameEvent>) {
    let MatchState { ball, left, right, .. } = state;
    let paddle: &Paddle = match side {
        Side::Left => left,
        Side::Right => right,
    };

    let Some(contact) = ball_paddle_contact(ball, paddle) else {
        return;
    };
    let Some(segment) = contact.segment else {
        return;
    };
    if !paddle.segments[segment] {
        return;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = deflection(ball.pos.y, paddle);
    events.push(GameEvent::Bounce {
        pos: ball.pos,
        surface: BounceSurface::Paddle(side),
    });
}

/// Award a goal to `scorer`, flash the screen and serve again
fn score_goal(state: &mut MatchState, scorer: Side, events: &mut Vec<GameEvent>) {
    state
        .paddle_mut(scorer)
        .award(GOAL_SCORE, ScoreReason::Goal, events);
    state.overlay.flash(FlashCause::Goal, scorer);
    log::debug!(
        "Goal for {:?}: {} - {}",
        scorer,
        state.left.score,
        state.right.score
    );
    reset_ball(state, events);
}

/// Re-centre the ball with a random serve: ±3 horizontally, [-2, 2) vertically
pub fn reset_ball(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let speed_x = if state.rng.random_bool(0.5) {
        BALL_SERVE_SPEED
    } else {
        -BALL_SERVE_SPEED
    };
    let speed_y = state.rng.random::<f32>() * 2.0 * BALL_SERVE_SPREAD - BALL_SERVE_SPREAD;

    let ball = &mut state.ball;
    ball.pos = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    ball.vel = Vec2::new(speed_x, speed_y);
    events.push(GameEvent::BallReset {
        pos: ball.pos,
        vel: ball.vel,
    });
}
