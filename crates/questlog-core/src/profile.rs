//! Profile: the goal collection plus the cumulative point ledger.

use serde::Serialize;

use crate::error::ProfileError;
use crate::goal::Goal;

/// Points required to advance one level.
pub const POINTS_PER_LEVEL: i64 = 1000;

/// Owner of an ordered goal collection and the total points earned.
///
/// Goal order is semantically meaningful: goals are referenced by position,
/// and [`Profile::describe`] numbers them 1-based in insertion order.
/// `total_points` only ever grows, and only through
/// [`Profile::record_goal_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    owner_name: String,
    total_points: i64,
    goals: Vec<Goal>,
}

impl Profile {
    /// Create a fresh profile with zero points and no goals.
    pub fn new(owner_name: impl Into<String>) -> Self {
        Profile {
            owner_name: owner_name.into(),
            total_points: 0,
            goals: Vec::new(),
        }
    }

    /// Rebuild a profile from decoded fields. Restore path for the store
    /// only; everyone else goes through [`Profile::new`] and events.
    pub(crate) fn restore(owner_name: String, total_points: i64, goals: Vec<Goal>) -> Self {
        Profile {
            owner_name,
            total_points,
            goals,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    /// Derived level: one level per [`POINTS_PER_LEVEL`] points.
    pub fn level(&self) -> i64 {
        self.total_points / POINTS_PER_LEVEL
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Append a goal to the collection. Never rejects based on content.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Record one progress event against the goal at `index` (0-based)
    /// and return the points awarded.
    ///
    /// This is the sole way `total_points` changes. An out-of-range index
    /// fails without mutating anything.
    pub fn record_goal_event(&mut self, index: usize) -> Result<i64, ProfileError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(ProfileError::GoalIndexOutOfRange { index, len })?;
        let award = goal.record_event();
        self.total_points += award;
        Ok(award)
    }

    /// Ordered status lines: owner, numbered goal statuses, totals.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.goals.len() + 2);
        lines.push(format!("User: {}", self.owner_name));
        for (i, goal) in self.goals.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, goal.status()));
        }
        lines.push(format!(
            "Total Points: {} | Level: {}",
            self.total_points,
            self.level()
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_goals() -> Profile {
        let mut profile = Profile::new("Ingrid");
        profile.add_goal(Goal::simple("Run a Marathon", "26.2 miles", 1000));
        profile.add_goal(Goal::eternal("Daily Scripture Study", "every day", 100));
        profile.add_goal(Goal::checklist("Temple Visits", "10 visits", 50, 10, 500));
        profile
    }

    #[test]
    fn new_profile_is_empty() {
        let profile = Profile::new("Ingrid");
        assert_eq!(profile.owner_name(), "Ingrid");
        assert_eq!(profile.total_points(), 0);
        assert_eq!(profile.level(), 0);
        assert!(profile.goals().is_empty());
    }

    #[test]
    fn total_points_is_the_sum_of_awards() {
        let mut profile = profile_with_goals();

        assert_eq!(profile.record_goal_event(0).unwrap(), 1000);
        assert_eq!(profile.record_goal_event(1).unwrap(), 100);
        assert_eq!(profile.record_goal_event(2).unwrap(), 50);
        assert_eq!(profile.total_points(), 1150);

        // Simple goal already complete: 0 awarded, ledger unchanged.
        assert_eq!(profile.record_goal_event(0).unwrap(), 0);
        assert_eq!(profile.total_points(), 1150);
    }

    #[test]
    fn level_uses_integer_division() {
        let mut profile = Profile::new("Ingrid");
        profile.add_goal(Goal::eternal("Study", "", 999));
        profile.record_goal_event(0).unwrap();
        assert_eq!(profile.total_points(), 999);
        assert_eq!(profile.level(), 0);

        profile.add_goal(Goal::simple("One more", "", 1));
        profile.record_goal_event(1).unwrap();
        assert_eq!(profile.total_points(), 1000);
        assert_eq!(profile.level(), 1);
    }

    #[test]
    fn out_of_range_index_leaves_state_untouched() {
        let mut profile = profile_with_goals();
        profile.record_goal_event(1).unwrap();
        let before = profile.clone();

        let err = profile.record_goal_event(3).unwrap_err();
        assert_eq!(
            err,
            ProfileError::GoalIndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(profile, before);

        assert!(profile.record_goal_event(usize::MAX).is_err());
        assert_eq!(profile, before);
    }

    #[test]
    fn describe_numbers_goals_in_insertion_order() {
        let mut profile = profile_with_goals();
        profile.record_goal_event(0).unwrap();

        let lines = profile.describe();
        assert_eq!(lines[0], "User: Ingrid");
        assert_eq!(lines[1], "1. [X] Run a Marathon (Simple Goal)");
        assert_eq!(lines[2], "2. [∞] Daily Scripture Study (Eternal Goal)");
        assert_eq!(
            lines[3],
            "3. [ ] Temple Visits (Checklist Goal) Completed 0/10 times"
        );
        assert_eq!(lines[4], "Total Points: 1000 | Level: 1");
    }
}
