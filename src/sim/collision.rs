//! Collision tests for axis-aligned game objects
//!
//! Pure geometry only: nothing here mutates state. All comparisons are
//! inclusive, so touching edges count as contact.

use glam::Vec2;

use super::state::{Ball, Paddle, Projectile, Side};
use crate::consts::PADDLE_SEGMENTS;

/// Inclusive overlap of two axis-aligned rectangles given as (min, size)
#[inline]
pub fn aabb_overlap(a_min: Vec2, a_size: Vec2, b_min: Vec2, b_size: Vec2) -> bool {
    a_min.x + a_size.x >= b_min.x
        && a_min.x <= b_min.x + b_size.x
        && a_min.y + a_size.y >= b_min.y
        && a_min.y <= b_min.y + b_size.y
}

/// Whether a vertical span `[top, bottom]` touches a segment span.
///
/// Counts when the span straddles the segment's top edge, straddles its
/// bottom edge, or lies entirely within the segment.
#[inline]
pub fn span_overlaps_segment(top: f32, bottom: f32, seg_top: f32, seg_bottom: f32) -> bool {
    (top <= seg_top && bottom >= seg_top)
        || (top <= seg_bottom && bottom >= seg_bottom)
        || (top >= seg_top && bottom <= seg_bottom)
}

/// Broad-phase test of a projectile against a paddle's full rectangle
pub fn projectile_hits_paddle(projectile: &Projectile, paddle: &Paddle) -> bool {
    aabb_overlap(
        projectile.pos,
        Vec2::new(projectile.width, projectile.height),
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
    )
}

/// Indices of the segments a projectile's vertical span overlaps, intact or not
pub fn overlapped_segments(projectile: &Projectile, paddle: &Paddle) -> Vec<usize> {
    let seg_h = paddle.segment_height();
    (0..PADDLE_SEGMENTS)
        .filter(|&i| {
            let seg_top = paddle.segment_top(i);
            span_overlaps_segment(projectile.pos.y, projectile.bottom(), seg_top, seg_top + seg_h)
        })
        .collect()
}

/// Contact between the ball and a paddle's body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Segment under the ball's vertical midpoint, if it maps into the paddle
    pub segment: Option<usize>,
}

/// Test the ball against a paddle.
///
/// The ball's vertical midpoint must lie on the paddle's span and its
/// leading edge (left edge for the left paddle, right edge for the right
/// one) must lie on the paddle's horizontal span.
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<PaddleContact> {
    let leading_x = match paddle.side {
        Side::Left => ball.pos.x,
        Side::Right => ball.pos.x + ball.size,
    };
    let mid_y = ball.mid_y();

    let in_x = leading_x >= paddle.pos.x && leading_x <= paddle.pos.x + paddle.width;
    let in_y = mid_y >= paddle.pos.y && mid_y <= paddle.pos.y + paddle.height;
    if !in_x || !in_y {
        return None;
    }

    let index = ((mid_y - paddle.pos.y) / paddle.segment_height()).floor();
    let segment = (index >= 0.0 && (index as usize) < PADDLE_SEGMENTS).then_some(index as usize);
    Some(PaddleContact { segment })
}

/// Vertical speed after a paddle bounce: hit position on the paddle
/// (measured from the ball's top edge) remapped linearly onto [-5, 5]
#[inline]
pub fn deflection(ball_y: f32, paddle: &Paddle) -> f32 {
    let hit = (ball_y - paddle.pos.y) / paddle.height;
    hit * 2.0 * crate::consts::BALL_MAX_DEFLECTION - crate::consts::BALL_MAX_DEFLECTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ProjectileKind;

    fn laser_at(x: f32, y: f32, height: f32) -> Projectile {
        Projectile {
            id: 1,
            pos: Vec2::new(x, y),
            width: 30.0,
            height,
            speed: 6.0,
            origin: Side::Left,
            kind: ProjectileKind::Destructive,
            age: 0,
            max_age: 200,
        }
    }

    #[test]
    fn test_aabb_touching_edges_count() {
        let a = Vec2::new(0.0, 0.0);
        let size = Vec2::new(10.0, 10.0);
        assert!(aabb_overlap(a, size, Vec2::new(10.0, 10.0), size));
        assert!(!aabb_overlap(a, size, Vec2::new(10.1, 0.0), size));
        assert!(!aabb_overlap(a, size, Vec2::new(0.0, -10.5), size));
    }

    #[test]
    fn test_span_overlap_cases() {
        // Straddles top edge
        assert!(span_overlaps_segment(5.0, 15.0, 10.0, 20.0));
        // Straddles bottom edge
        assert!(span_overlaps_segment(15.0, 25.0, 10.0, 20.0));
        // Inside
        assert!(span_overlaps_segment(12.0, 18.0, 10.0, 20.0));
        // Covers
        assert!(span_overlaps_segment(0.0, 30.0, 10.0, 20.0));
        // Disjoint
        assert!(!span_overlaps_segment(21.0, 30.0, 10.0, 20.0));
        assert!(!span_overlaps_segment(0.0, 9.0, 10.0, 20.0));
    }

    #[test]
    fn test_centered_laser_overlaps_middle_segments() {
        let paddle = Paddle::new(Side::Right);
        // Paddle spans [225, 375]; segment boundary at 300
        let laser = laser_at(940.0, 295.0, 10.0);
        assert_eq!(overlapped_segments(&laser, &paddle), vec![1, 2]);
    }

    #[test]
    fn test_full_height_laser_overlaps_all_segments() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.pos.y = 0.0;
        let laser = laser_at(950.0, 0.0, 150.0);
        assert!(projectile_hits_paddle(&laser, &paddle));
        assert_eq!(overlapped_segments(&laser, &paddle), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_projectile_broad_phase_miss() {
        let paddle = Paddle::new(Side::Right);
        assert!(!projectile_hits_paddle(&laser_at(900.0, 300.0, 10.0), &paddle));
        assert!(!projectile_hits_paddle(&laser_at(960.0, 10.0, 10.0), &paddle));
    }

    #[test]
    fn test_ball_contact_segment_lookup() {
        let paddle = Paddle::new(Side::Left);
        let ball = Ball {
            pos: Vec2::new(25.0, 225.0 + 80.0 - 5.0),
            vel: Vec2::new(-3.0, 0.0),
            size: 10.0,
        };
        let contact = ball_paddle_contact(&ball, &paddle);
        assert_eq!(contact, Some(PaddleContact { segment: Some(2) }));
    }

    #[test]
    fn test_ball_contact_bottom_edge_is_out_of_range() {
        let paddle = Paddle::new(Side::Left);
        // Midpoint exactly on the bottom edge maps to index 4
        let ball = Ball {
            pos: Vec2::new(25.0, 375.0 - 5.0),
            vel: Vec2::new(-3.0, 0.0),
            size: 10.0,
        };
        assert_eq!(
            ball_paddle_contact(&ball, &paddle),
            Some(PaddleContact { segment: None })
        );
    }

    #[test]
    fn test_right_paddle_uses_leading_edge() {
        let paddle = Paddle::new(Side::Right);
        let mut ball = Ball {
            pos: Vec2::new(962.0, 290.0),
            vel: Vec2::new(3.0, 0.0),
            size: 10.0,
        };
        assert!(ball_paddle_contact(&ball, &paddle).is_some());
        ball.pos.x = 958.0;
        assert!(ball_paddle_contact(&ball, &paddle).is_none());
    }

    #[test]
    fn test_deflection_range() {
        let paddle = Paddle::new(Side::Left);
        assert!((deflection(paddle.pos.y, &paddle) + 5.0).abs() < 1e-5);
        assert!((deflection(paddle.pos.y + 75.0, &paddle)).abs() < 1e-5);
        assert!((deflection(paddle.pos.y + 150.0, &paddle) - 5.0).abs() < 1e-5);
    }
}
