//! Goal management commands.

use clap::{Subcommand, ValueEnum};
use questlog_core::{Config, Goal};

/// Reward shape for `goal add`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalKindArg {
    /// One-shot goal, awards its points once
    Simple,
    /// Recurring goal, awards its points on every event
    Eternal,
    /// Counted goal with a completion bonus
    Checklist,
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a new goal
    Add {
        /// Goal name
        name: String,
        /// Reward shape
        #[arg(long, value_enum)]
        kind: GoalKindArg,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points awarded per recorded event
        #[arg(long, default_value = "0")]
        points: i64,
        /// Events needed to complete a checklist goal
        #[arg(long)]
        target: Option<u32>,
        /// Bonus points when a checklist goal completes
        #[arg(long)]
        bonus: Option<i64>,
    },
    /// List goals with status and totals
    List {
        /// Output goals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record one progress event against a goal
    Record {
        /// Goal number as shown by `goal list` (1-based)
        number: usize,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        GoalAction::Add {
            name,
            kind,
            description,
            points,
            target,
            bonus,
        } => {
            let goal = match kind {
                GoalKindArg::Simple => Goal::simple(name, description, points),
                GoalKindArg::Eternal => Goal::eternal(name, description, points),
                GoalKindArg::Checklist => {
                    let target = target.ok_or("--target is required for checklist goals")?;
                    if target == 0 {
                        return Err("--target must be at least 1".into());
                    }
                    Goal::checklist(name, description, points, target, bonus.unwrap_or(0))
                }
            };

            let mut profile = super::load_or_create(&config)?;
            profile.add_goal(goal);
            super::store(&config)?.save(&profile)?;
            println!("goal added ({} tracked)", profile.goals().len());
        }
        GoalAction::List { json } => {
            let profile = super::load_or_create(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(profile.goals())?);
            } else {
                for line in profile.describe() {
                    println!("{line}");
                }
            }
        }
        GoalAction::Record { number } => {
            let index = number
                .checked_sub(1)
                .ok_or("goal numbers start at 1")?;
            let mut profile = super::load_or_create(&config)?;
            let earned = profile.record_goal_event(index)?;
            super::store(&config)?.save(&profile)?;
            println!(
                "You earned {earned} points! Total: {} | Level: {}",
                profile.total_points(),
                profile.level()
            );
        }
    }
    Ok(())
}
