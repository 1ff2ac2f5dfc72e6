//! Destructible paddle segments
//!
//! A laser that reaches a paddle breaks every intact segment its height
//! overlaps. Each broken segment pays the shooter; breaking the last one
//! pays a large bonus and the paddle is rebuilt on the spot.

use super::collision::overlapped_segments;
use super::events::{GameEvent, ScoreReason};
use super::state::{FlashCause, Overlay, Paddle, Projectile, ProjectileKind};
use crate::consts::*;

/// What a resolved laser hit did to its target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Segments broken by this hit, in index order
    pub destroyed: Vec<usize>,
    /// The hit broke the last intact segment (target has been refilled)
    pub wiped: bool,
}

impl Paddle {
    /// Break one segment. Returns false (and changes nothing) if it was
    /// already broken or out of range.
    pub fn destroy_segment(&mut self, index: usize) -> bool {
        match self.segments.get_mut(index) {
            Some(intact) if *intact => {
                *intact = false;
                true
            }
            _ => false,
        }
    }

    /// Rebuild every segment
    pub fn refill_segments(&mut self) {
        self.segments = [true; PADDLE_SEGMENTS];
    }

    /// Add points and report the new total
    pub fn award(&mut self, delta: u32, reason: ScoreReason, events: &mut Vec<GameEvent>) {
        self.score += delta;
        events.push(GameEvent::Score {
            side: self.side,
            delta,
            total: self.score,
            reason,
        });
    }
}

/// Apply a projectile that reached `target`'s rectangle.
///
/// `shooter` is the paddle on the projectile's origin side.
pub fn resolve_hit(
    projectile: &Projectile,
    target: &mut Paddle,
    shooter: &mut Paddle,
    overlay: &mut Overlay,
    events: &mut Vec<GameEvent>,
) -> HitReport {
    let mut report = HitReport::default();

    match projectile.kind {
        ProjectileKind::Destructive => {
            for index in overlapped_segments(projectile, target) {
                if !target.destroy_segment(index) {
                    continue;
                }
                events.push(GameEvent::SegmentDestroyed {
                    pos: target.segment_center(index),
                    segment: index,
                    side: target.side,
                    lead: report.destroyed.is_empty(),
                });
                shooter.award(SEGMENT_SCORE, ScoreReason::Segment, events);
                report.destroyed.push(index);
            }

            if target.is_fully_destroyed() {
                shooter.award(DESTRUCTION_BONUS, ScoreReason::DestructionBonus, events);
                overlay.flash(FlashCause::Destruction, shooter.side);
                overlay.announce(DESTRUCTION_BANNER, shooter.side);
                target.refill_segments();
                events.push(GameEvent::PaddleFullyDestroyed {
                    side: target.side,
                    pos: target.center(),
                    bonus: DESTRUCTION_BONUS,
                });
                log::debug!(
                    "{:?} paddle wiped out, {:?} +{} (total {})",
                    target.side,
                    shooter.side,
                    DESTRUCTION_BONUS,
                    shooter.score
                );
                report.wiped = true;
            }
        }
    }

    report
}
