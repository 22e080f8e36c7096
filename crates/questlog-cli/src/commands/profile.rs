//! Profile management commands.

use clap::Subcommand;
use questlog_core::{Config, Profile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile
    Show {
        /// Output the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create and save a fresh profile, replacing any saved one
    Init {
        /// Owner name
        owner: String,
        /// Skip the starter goals
        #[arg(long)]
        no_seed: bool,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        ProfileAction::Show { json } => {
            let profile = super::load_or_create(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                for line in profile.describe() {
                    println!("{line}");
                }
            }
        }
        ProfileAction::Init { owner, no_seed } => {
            let mut profile = Profile::new(owner);
            if config.seed_starter_goals && !no_seed {
                for goal in super::starter_goals() {
                    profile.add_goal(goal);
                }
            }
            super::store(&config)?.save(&profile)?;
            println!(
                "profile created for {} ({} goals)",
                profile.owner_name(),
                profile.goals().len()
            );
        }
    }
    Ok(())
}
