//! Savings goal model
//!
//! A goal tracks a saved amount toward a target. Saving past the target is
//! allowed; the saved amount is never negative.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A named savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target: Money,
    pub saved: Money,
}

impl Goal {
    /// Amount still needed to reach the target (zero once achieved)
    pub fn remaining(&self) -> Money {
        if self.saved >= self.target {
            Money::zero()
        } else {
            self.target - self.saved
        }
    }
}

/// Progress snapshot for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub target: Money,
    pub saved: Money,
    /// saved / target; 0.0 when the target is zero
    pub ratio: f64,
    pub achieved: bool,
}

impl GoalProgress {
    pub fn from_goal(goal: &Goal) -> Self {
        let (ratio, achieved) = match goal.saved.ratio_of(goal.target) {
            Some(ratio) => (ratio, goal.saved >= goal.target),
            None => (0.0, false),
        };

        Self {
            target: goal.target,
            saved: goal.saved,
            ratio,
            achieved,
        }
    }

    /// Ratio as a whole percentage, for display
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: i64, saved: i64) -> Goal {
        Goal {
            id: 1,
            name: "Vacation".into(),
            target: Money::from_units(target),
            saved: Money::from_units(saved),
        }
    }

    #[test]
    fn test_half_way() {
        let progress = GoalProgress::from_goal(&goal(10000, 5000));
        assert_eq!(progress.ratio, 0.5);
        assert!(!progress.achieved);
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn test_achieved() {
        let progress = GoalProgress::from_goal(&goal(10000, 10000));
        assert_eq!(progress.ratio, 1.0);
        assert!(progress.achieved);
    }

    #[test]
    fn test_over_achievement() {
        let g = goal(100, 150);
        let progress = GoalProgress::from_goal(&g);
        assert_eq!(progress.ratio, 1.5);
        assert!(progress.achieved);
        assert_eq!(g.remaining(), Money::zero());
    }

    #[test]
    fn test_zero_target_is_guarded() {
        let progress = GoalProgress::from_goal(&goal(0, 10));
        assert_eq!(progress.ratio, 0.0);
        assert!(!progress.achieved);
    }
}
