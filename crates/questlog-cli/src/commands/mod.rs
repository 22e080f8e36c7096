//! CLI subcommands.

pub mod config;
pub mod goal;
pub mod profile;

use questlog_core::{Config, Goal, Profile, ProfileStore};

/// Starter goals seeded into a brand-new profile.
fn starter_goals() -> Vec<Goal> {
    vec![
        Goal::simple(
            "Run a Marathon",
            "Complete a marathon to get 1000 points",
            1000,
        ),
        Goal::eternal("Daily Scripture Study", "Study scriptures daily", 100),
        Goal::checklist("Temple Visits", "Visit the temple 10 times", 50, 10, 500),
    ]
}

/// Open the profile store named by the config.
fn store(config: &Config) -> Result<ProfileStore, Box<dyn std::error::Error>> {
    Ok(ProfileStore::open_named(&config.save_file)?)
}

/// Load the saved profile, or fall back to a fresh one on first run.
///
/// Goal lines skipped during load produce a warning, not a failure.
fn load_or_create(config: &Config) -> Result<Profile, Box<dyn std::error::Error>> {
    match store(config)?.load()? {
        Some(decoded) => {
            if decoded.skipped_lines > 0 {
                eprintln!(
                    "warning: skipped {} unreadable goal line(s)",
                    decoded.skipped_lines
                );
            }
            Ok(decoded.profile)
        }
        None => {
            let mut profile = Profile::new(config.owner_name.clone());
            if config.seed_starter_goals {
                for goal in starter_goals() {
                    profile.add_goal(goal);
                }
            }
            Ok(profile)
        }
    }
}
