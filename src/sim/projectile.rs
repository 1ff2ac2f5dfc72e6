//! Laser flight, lifetime and impact dispatch

use super::collision::projectile_hits_paddle;
use super::events::GameEvent;
use super::segments::resolve_hit;
use super::state::{MatchState, Side};
use crate::consts::CANVAS_WIDTH;

/// Advance every live projectile one tick.
///
/// Order per projectile: move, age (expire past `max_age`), test against
/// the opposing paddle (any hit consumes the projectile), then cull it if it
/// has left the playfield horizontally. Spawn order is preserved.
pub fn update_projectiles(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let MatchState {
        left,
        right,
        projectiles,
        overlay,
        ..
    } = state;

    projectiles.retain_mut(|projectile| {
        projectile.pos.x += projectile.speed;
        projectile.age += 1;
        if projectile.age > projectile.max_age {
            return false;
        }

        let (target, shooter) = match projectile.target() {
            Side::Left => (&mut *left, &mut *right),
            Side::Right => (&mut *right, &mut *left),
        };
        if projectile_hits_paddle(projectile, target) {
            let report = resolve_hit(projectile, target, shooter, overlay, events);
            log::trace!(
                "Laser {} hit {:?}: segments {:?}, wiped {}",
                projectile.id,
                target.side,
                report.destroyed,
                report.wiped
            );
            return false;
        }

        projectile.pos.x >= 0.0 && projectile.pos.x <= CANVAS_WIDTH
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Projectile, ProjectileKind};
    use glam::Vec2;

    fn push_laser(state: &mut MatchState, origin: Side, pos: Vec2, height: f32) {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos,
            width: LASER_WIDTH,
            height,
            speed: LASER_SPEED * origin.facing(),
            origin,
            kind: ProjectileKind::Destructive,
            age: 0,
            max_age: LASER_MAX_AGE,
        });
    }

    #[test]
    fn test_projectile_advances_and_ages() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        push_laser(&mut state, Side::Left, Vec2::new(100.0, 100.0), 10.0);
        update_projectiles(&mut state, &mut events);
        assert_eq!(state.projectiles[0].pos.x, 106.0);
        assert_eq!(state.projectiles[0].age, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_projectile_expires_after_max_age() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        push_laser(&mut state, Side::Left, Vec2::new(100.0, 10.0), 10.0);
        state.projectiles[0].speed = 0.0;
        state.projectiles[0].age = LASER_MAX_AGE - 1;
        update_projectiles(&mut state, &mut events);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].age, LASER_MAX_AGE);
        update_projectiles(&mut state, &mut events);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_culled_off_field() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        // Above the paddles' reach so nothing is hit on the way out
        push_laser(&mut state, Side::Right, Vec2::new(4.0, 0.0), 10.0);
        state.left.pos.y = 400.0;
        update_projectiles(&mut state, &mut events);
        assert!(state.projectiles.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_projectile_culled_past_right_edge() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        push_laser(&mut state, Side::Left, Vec2::new(CANVAS_WIDTH - 6.0, 0.0), 10.0);
        update_projectiles(&mut state, &mut events);
        // Exactly on the edge is still in play
        assert_eq!(state.projectiles[0].pos.x, CANVAS_WIDTH);
        update_projectiles(&mut state, &mut events);
        assert!(state.projectiles.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_projectile_ignores_own_paddle() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        // Overlapping the left paddle but fired by it
        push_laser(&mut state, Side::Left, Vec2::new(15.0, 290.0), 10.0);
        update_projectiles(&mut state, &mut events);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.left.segments, [true; PADDLE_SEGMENTS]);
    }

    #[test]
    fn test_hit_consumes_projectile_and_scores_shooter() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        push_laser(&mut state, Side::Right, Vec2::new(35.0, 295.0), 10.0);
        update_projectiles(&mut state, &mut events);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.left.segments, [true, false, false, true]);
        assert_eq!(state.right.score, 4);
        assert_eq!(state.left.score, 0);
    }

    #[test]
    fn test_hit_on_broken_segments_still_consumes() {
        let mut state = MatchState::new(3);
        let mut events = Vec::new();
        state.left.segments = [true, false, false, true];
        push_laser(&mut state, Side::Right, Vec2::new(35.0, 295.0), 10.0);
        update_projectiles(&mut state, &mut events);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.right.score, 0);
        assert!(events.is_empty());
    }
}
