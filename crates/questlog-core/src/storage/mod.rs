//! Persistence layer: profile files and TOML configuration.

mod config;
pub mod profile_store;

pub use config::Config;
pub use profile_store::{decode_profile, encode_profile, DecodedProfile, ProfileStore};

use std::path::PathBuf;

/// Returns `~/.config/questlog[-dev]/`, creating it if needed.
///
/// Resolution order:
/// - `QUESTLOG_DATA_DIR`, if set (tests and scripts point this at a
///   throwaway directory)
/// - `~/.config/questlog-dev` when `QUESTLOG_ENV=dev`
/// - `~/.config/questlog` otherwise
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var("QUESTLOG_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("QUESTLOG_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("questlog-dev")
            } else {
                base_dir.join("questlog")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
