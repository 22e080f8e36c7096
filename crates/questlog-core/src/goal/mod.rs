//! Goal types and event-recording semantics.
//!
//! A goal is a trackable objective with a reward rule. Three reward shapes
//! exist and the set is closed: the line codec in [`codec`] dispatches on a
//! fixed type tag per shape, so adding a shape means extending the codec in
//! the same change.
//!
//! Completion rules per shape:
//!
//! - **Simple**: one-shot. The first recorded event completes the goal and
//!   awards its base points; later events award nothing.
//! - **Eternal**: no terminal state. Every recorded event awards the base
//!   points, indefinitely (a recurring habit).
//! - **Checklist**: counted. Each event awards the base points and advances
//!   the count; reaching the target completes the goal and adds the bonus.
//!   Further events award nothing.

pub mod codec;

use std::fmt;

use serde::Serialize;

/// Discriminant for the three goal shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Simple,
    Eternal,
    Checklist,
}

impl GoalKind {
    /// Type tag used by the line codec for this shape.
    pub fn tag(&self) -> &'static str {
        match self {
            GoalKind::Simple => "SimpleGoal",
            GoalKind::Eternal => "EternalGoal",
            GoalKind::Checklist => "ChecklistGoal",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalKind::Simple => "simple",
            GoalKind::Eternal => "eternal",
            GoalKind::Checklist => "checklist",
        };
        f.write_str(label)
    }
}

/// A trackable objective with a reward rule and completion state.
///
/// Construct fresh goals via [`Goal::simple`], [`Goal::eternal`] and
/// [`Goal::checklist`]; the only post-construction mutator is
/// [`Goal::record_event`]. Restoring a goal with arbitrary completion
/// state is the codec's job ([`codec::decode`]), not a public setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goal {
    /// One-shot goal.
    Simple {
        name: String,
        description: String,
        base_points: i64,
        complete: bool,
    },
    /// Recurring goal with no terminal state.
    Eternal {
        name: String,
        description: String,
        base_points: i64,
        /// Never set by this shape's own logic. The persisted format
        /// stores it, so a decoded value must survive a round trip, and
        /// recording awards points regardless of it.
        complete: bool,
    },
    /// Counted goal with a completion bonus.
    Checklist {
        name: String,
        description: String,
        base_points: i64,
        complete: bool,
        current_count: u32,
        target_count: u32,
        bonus_points: i64,
    },
}

impl Goal {
    /// Create a fresh simple goal.
    pub fn simple(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Self {
        Goal::Simple {
            name: name.into(),
            description: description.into(),
            base_points,
            complete: false,
        }
    }

    /// Create a fresh eternal goal.
    pub fn eternal(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Self {
        Goal::Eternal {
            name: name.into(),
            description: description.into(),
            base_points,
            complete: false,
        }
    }

    /// Create a fresh checklist goal with zero progress.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        target_count: u32,
        bonus_points: i64,
    ) -> Self {
        Goal::Checklist {
            name: name.into(),
            description: description.into(),
            base_points,
            complete: false,
            current_count: 0,
            target_count,
            bonus_points,
        }
    }

    pub fn kind(&self) -> GoalKind {
        match self {
            Goal::Simple { .. } => GoalKind::Simple,
            Goal::Eternal { .. } => GoalKind::Eternal,
            Goal::Checklist { .. } => GoalKind::Checklist,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Goal::Simple { name, .. }
            | Goal::Eternal { name, .. }
            | Goal::Checklist { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Goal::Simple { description, .. }
            | Goal::Eternal { description, .. }
            | Goal::Checklist { description, .. } => description,
        }
    }

    pub fn base_points(&self) -> i64 {
        match self {
            Goal::Simple { base_points, .. }
            | Goal::Eternal { base_points, .. }
            | Goal::Checklist { base_points, .. } => *base_points,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Goal::Simple { complete, .. }
            | Goal::Eternal { complete, .. }
            | Goal::Checklist { complete, .. } => *complete,
        }
    }

    /// Record one progress event and return the points awarded.
    ///
    /// Completed simple and checklist goals award 0 and stay untouched, so
    /// a terminal goal can never be double-scored. Eternal goals award
    /// their base points on every call and never reach a terminal state.
    pub fn record_event(&mut self) -> i64 {
        match self {
            Goal::Simple {
                base_points,
                complete,
                ..
            } => {
                if *complete {
                    return 0;
                }
                *complete = true;
                *base_points
            }
            Goal::Eternal { base_points, .. } => *base_points,
            Goal::Checklist {
                base_points,
                complete,
                current_count,
                target_count,
                bonus_points,
                ..
            } => {
                if *complete {
                    return 0;
                }
                *current_count += 1;
                let mut award = *base_points;
                if *current_count >= *target_count {
                    *complete = true;
                    award += *bonus_points;
                }
                award
            }
        }
    }

    /// Human-readable one-line status.
    pub fn status(&self) -> String {
        match self {
            Goal::Simple { name, complete, .. } => {
                let mark = if *complete { "[X]" } else { "[ ]" };
                format!("{mark} {name} (Simple Goal)")
            }
            Goal::Eternal { name, .. } => format!("[∞] {name} (Eternal Goal)"),
            Goal::Checklist {
                name,
                complete,
                current_count,
                target_count,
                ..
            } => {
                if *complete {
                    format!(
                        "[X] {name} (Checklist Goal) Completed {current_count}/{target_count} times - Bonus earned"
                    )
                } else {
                    format!(
                        "[ ] {name} (Checklist Goal) Completed {current_count}/{target_count} times"
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_goal_awards_once() {
        let mut goal = Goal::simple("Run a Marathon", "26.2 miles", 1000);
        assert!(!goal.is_complete());

        assert_eq!(goal.record_event(), 1000);
        assert!(goal.is_complete());

        // Already complete: no points, no state change.
        assert_eq!(goal.record_event(), 0);
        assert_eq!(goal.record_event(), 0);
        assert!(goal.is_complete());
    }

    #[test]
    fn eternal_goal_awards_forever() {
        let mut goal = Goal::eternal("Daily Scripture Study", "every day", 100);
        for _ in 0..50 {
            assert_eq!(goal.record_event(), 100);
        }
        assert!(!goal.is_complete());
    }

    #[test]
    fn eternal_goal_ignores_restored_complete_flag() {
        // The flag can only arrive via the restore path; awards continue.
        let mut goal = Goal::Eternal {
            name: "Journal".into(),
            description: String::new(),
            base_points: 25,
            complete: true,
        };
        assert_eq!(goal.record_event(), 25);
        assert!(goal.is_complete());
    }

    #[test]
    fn checklist_goal_awards_bonus_on_target() {
        let mut goal = Goal::checklist("Temple Visits", "visit 3 times", 10, 3, 50);

        assert_eq!(goal.record_event(), 10);
        assert_eq!(goal.record_event(), 10);
        assert!(!goal.is_complete());

        // Third event reaches the target: base + bonus.
        assert_eq!(goal.record_event(), 60);
        assert!(goal.is_complete());

        // Complete: the count stops advancing.
        assert_eq!(goal.record_event(), 0);
        match goal {
            Goal::Checklist { current_count, .. } => assert_eq!(current_count, 3),
            _ => unreachable!(),
        }
    }

    #[test]
    fn status_lines_render_markers() {
        let mut simple = Goal::simple("Read", "a book", 50);
        assert_eq!(simple.status(), "[ ] Read (Simple Goal)");
        simple.record_event();
        assert_eq!(simple.status(), "[X] Read (Simple Goal)");

        let eternal = Goal::eternal("Exercise", "daily", 10);
        assert_eq!(eternal.status(), "[∞] Exercise (Eternal Goal)");

        let mut checklist = Goal::checklist("Visits", "", 5, 2, 20);
        assert_eq!(checklist.status(), "[ ] Visits (Checklist Goal) Completed 0/2 times");
        checklist.record_event();
        checklist.record_event();
        assert_eq!(
            checklist.status(),
            "[X] Visits (Checklist Goal) Completed 2/2 times - Bonus earned"
        );
    }

    #[test]
    fn kind_tags_match_wire_format() {
        assert_eq!(GoalKind::Simple.tag(), "SimpleGoal");
        assert_eq!(GoalKind::Eternal.tag(), "EternalGoal");
        assert_eq!(GoalKind::Checklist.tag(), "ChecklistGoal");
    }
}
