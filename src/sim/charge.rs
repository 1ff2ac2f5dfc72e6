//! Charge economy and action gating
//!
//! Each paddle has one charge meter that refills by one unit per tick.
//! Firing costs a quarter of the meter; upgrading and healing need it full
//! and drain it completely.

use serde::{Deserialize, Serialize};

use super::state::Paddle;
use crate::consts::*;

/// Result of attempting a charge-gated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Fired,
    Upgraded { level: u32 },
    Healed { segment: usize },
    OnCooldown,
    InsufficientCharge,
    /// Nothing to do; charge and cooldown untouched
    NoOp,
}

impl ActionOutcome {
    /// True if the action went through and state changed
    pub fn performed(self) -> bool {
        matches!(
            self,
            ActionOutcome::Fired | ActionOutcome::Upgraded { .. } | ActionOutcome::Healed { .. }
        )
    }
}

impl Paddle {
    /// Passive regeneration, capped at `MAX_CHARGE`
    pub fn regen_charge(&mut self) {
        self.charge = (self.charge + 1.0).min(MAX_CHARGE);
    }

    /// Count every cooldown down by one tick, floored at zero
    pub fn tick_cooldowns(&mut self) {
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        self.heal_cooldown = self.heal_cooldown.saturating_sub(1);
        self.upgrade_cooldown = self.upgrade_cooldown.saturating_sub(1);
    }

    #[inline]
    pub fn is_fully_charged(&self) -> bool {
        self.charge >= MAX_CHARGE
    }

    /// Spend a quarter of the meter to fire. The caller spawns the projectile.
    pub fn try_fire(&mut self) -> ActionOutcome {
        if self.fire_cooldown > 0 {
            return ActionOutcome::OnCooldown;
        }
        if self.charge < FIRE_COST {
            return ActionOutcome::InsufficientCharge;
        }
        self.charge = (self.charge - FIRE_COST).max(0.0);
        self.fire_cooldown = FIRE_COOLDOWN;
        ActionOutcome::Fired
    }

    /// Grow the laser by 20% in both dimensions, draining the full meter
    pub fn try_upgrade(&mut self) -> ActionOutcome {
        if self.upgrade_cooldown > 0 {
            return ActionOutcome::OnCooldown;
        }
        if !self.is_fully_charged() {
            return ActionOutcome::InsufficientCharge;
        }
        self.laser_width *= LASER_UPGRADE_FACTOR;
        self.laser_height *= LASER_UPGRADE_FACTOR;
        self.laser_level += 1;
        self.charge = 0.0;
        self.upgrade_cooldown = UPGRADE_COOLDOWN;
        ActionOutcome::Upgraded {
            level: self.laser_level,
        }
    }

    /// Regenerate the lowest-indexed destroyed segment.
    ///
    /// With every segment intact this is a `NoOp`: no charge is spent and
    /// the cooldown is not started.
    pub fn try_heal(&mut self) -> ActionOutcome {
        if self.heal_cooldown > 0 {
            return ActionOutcome::OnCooldown;
        }
        if !self.is_fully_charged() {
            return ActionOutcome::InsufficientCharge;
        }
        let Some(segment) = self.first_destroyed() else {
            return ActionOutcome::NoOp;
        };
        self.segments[segment] = true;
        self.charge = 0.0;
        self.heal_cooldown = HEAL_COOLDOWN;
        ActionOutcome::Healed { segment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use proptest::prelude::*;

    fn paddle_with_charge(charge: f32) -> Paddle {
        let mut paddle = Paddle::new(Side::Left);
        paddle.charge = charge;
        paddle
    }

    #[test]
    fn test_fire_below_cost_is_rejected() {
        let mut paddle = paddle_with_charge(299.0);
        assert_eq!(paddle.try_fire(), ActionOutcome::InsufficientCharge);
        assert_eq!(paddle.charge, 299.0);
        assert_eq!(paddle.fire_cooldown, 0);
    }

    #[test]
    fn test_fire_at_cost_spends_exactly_a_quarter() {
        let mut paddle = paddle_with_charge(300.0);
        assert_eq!(paddle.try_fire(), ActionOutcome::Fired);
        assert_eq!(paddle.charge, 0.0);
        assert_eq!(paddle.fire_cooldown, 30);

        let mut full = paddle_with_charge(MAX_CHARGE);
        assert_eq!(full.try_fire(), ActionOutcome::Fired);
        assert_eq!(full.charge, MAX_CHARGE - FIRE_COST);
    }

    #[test]
    fn test_fire_on_cooldown_is_rejected() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        paddle.fire_cooldown = 1;
        assert_eq!(paddle.try_fire(), ActionOutcome::OnCooldown);
        assert_eq!(paddle.charge, MAX_CHARGE);
    }

    #[test]
    fn test_upgrade_grows_laser_and_drains() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        assert_eq!(paddle.try_upgrade(), ActionOutcome::Upgraded { level: 2 });
        assert!((paddle.laser_width - 36.0).abs() < 1e-4);
        assert!((paddle.laser_height - 12.0).abs() < 1e-4);
        assert_eq!(paddle.charge, 0.0);
        assert_eq!(paddle.upgrade_cooldown, UPGRADE_COOLDOWN);

        // Needs a full meter again
        paddle.upgrade_cooldown = 0;
        paddle.charge = MAX_CHARGE - 1.0;
        assert_eq!(paddle.try_upgrade(), ActionOutcome::InsufficientCharge);
        assert_eq!(paddle.laser_level, 2);
    }

    #[test]
    fn test_upgrade_on_cooldown_is_rejected() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        paddle.upgrade_cooldown = 1;
        assert_eq!(paddle.try_upgrade(), ActionOutcome::OnCooldown);
        assert_eq!(paddle.charge, MAX_CHARGE);
        assert_eq!(paddle.laser_level, 1);
    }

    #[test]
    fn test_heal_on_cooldown_is_rejected() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        paddle.segments[2] = false;
        paddle.heal_cooldown = HEAL_COOLDOWN;
        assert_eq!(paddle.try_heal(), ActionOutcome::OnCooldown);
        assert_eq!(paddle.charge, MAX_CHARGE);
        assert!(!paddle.segments[2]);
    }

    #[test]
    fn test_heal_with_nothing_destroyed_is_noop() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        assert_eq!(paddle.try_heal(), ActionOutcome::NoOp);
        assert_eq!(paddle.charge, MAX_CHARGE);
        assert_eq!(paddle.heal_cooldown, 0);
        assert_eq!(paddle.segments, [true; PADDLE_SEGMENTS]);
    }

    #[test]
    fn test_heal_restores_lowest_destroyed_segment() {
        let mut paddle = paddle_with_charge(MAX_CHARGE);
        paddle.segments = [true, false, true, false];
        assert_eq!(paddle.try_heal(), ActionOutcome::Healed { segment: 1 });
        assert_eq!(paddle.segments, [true, true, true, false]);
        assert_eq!(paddle.charge, 0.0);
        assert_eq!(paddle.heal_cooldown, HEAL_COOLDOWN);
    }

    #[test]
    fn test_heal_requires_full_charge() {
        let mut paddle = paddle_with_charge(MAX_CHARGE - 0.5);
        paddle.segments[0] = false;
        assert_eq!(paddle.try_heal(), ActionOutcome::InsufficientCharge);
        assert!(!paddle.segments[0]);
    }

    #[test]
    fn test_cooldowns_floor_at_zero() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.fire_cooldown = 1;
        paddle.tick_cooldowns();
        paddle.tick_cooldowns();
        assert_eq!(paddle.fire_cooldown, 0);
        assert_eq!(paddle.heal_cooldown, 0);
        assert_eq!(paddle.upgrade_cooldown, 0);
    }

    #[test]
    fn test_regen_stops_at_max() {
        let mut paddle = paddle_with_charge(MAX_CHARGE - 1.0);
        paddle.regen_charge();
        assert_eq!(paddle.charge, MAX_CHARGE);
        paddle.regen_charge();
        assert_eq!(paddle.charge, MAX_CHARGE);
    }

    proptest! {
        #[test]
        fn prop_charge_stays_in_bounds(
            start in 0.0f32..=MAX_CHARGE,
            actions in proptest::collection::vec(0u8..4, 0..400),
        ) {
            let mut paddle = paddle_with_charge(start);
            for action in actions {
                paddle.regen_charge();
                paddle.tick_cooldowns();
                match action {
                    0 => { paddle.try_fire(); }
                    1 => { paddle.try_upgrade(); }
                    2 => {
                        paddle.segments[0] = false;
                        paddle.try_heal();
                    }
                    _ => {}
                }
                prop_assert!(paddle.charge >= 0.0);
                prop_assert!(paddle.charge <= MAX_CHARGE);
            }
        }
    }
}
