//! Whole-profile persistence as a line-oriented text blob.
//!
//! Format, one file per profile:
//!
//! ```text
//! <ownerName>|<totalPoints>
//! SimpleGoal|<name>|<description>|<basePoints>|<complete>
//! EternalGoal|<name>|<description>|<basePoints>|<complete>
//! ChecklistGoal|<name>|<description>|<basePoints>|<complete>|<currentCount>|<targetCount>|<bonusPoints>
//! ```
//!
//! Decoding is deliberately asymmetric: a malformed header fails the whole
//! load, while a malformed goal line is skipped and counted so the rest of
//! the profile still comes back. A partially restored profile beats losing
//! everything to one corrupt line.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::goal::codec;
use crate::profile::Profile;

use super::data_dir;

/// A profile decoded from a blob, with a count of goal lines that were
/// dropped because they failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedProfile {
    pub profile: Profile,
    pub skipped_lines: usize,
}

/// Encode a whole profile: header line, then one line per goal in
/// collection order, trailing newline.
pub fn encode_profile(profile: &Profile) -> String {
    let mut blob = format!("{}|{}\n", profile.owner_name(), profile.total_points());
    for goal in profile.goals() {
        blob.push_str(&codec::encode(goal));
        blob.push('\n');
    }
    blob
}

/// Decode a whole profile from a blob.
///
/// # Errors
///
/// Fails only on a missing or malformed header (fewer than two fields, or
/// a points field that is not an integer). Goal lines that fail to decode
/// are skipped, not fatal; the skip count is reported on the result.
pub fn decode_profile(blob: &str) -> Result<DecodedProfile, StoreError> {
    let mut lines = blob.lines();
    let header = lines
        .next()
        .ok_or_else(|| StoreError::MalformedHeader("empty blob".to_string()))?;

    let fields: Vec<&str> = header.split(codec::DELIMITER).collect();
    if fields.len() < 2 {
        return Err(StoreError::MalformedHeader(format!(
            "expected 'owner|points', got '{header}'"
        )));
    }
    let total_points: i64 = fields[1].trim().parse().map_err(|_| {
        StoreError::MalformedHeader(format!("points field is not an integer: '{}'", fields[1]))
    })?;

    let mut goals = Vec::new();
    let mut skipped_lines = 0;
    for line in lines {
        match codec::decode(line) {
            Ok(goal) => goals.push(goal),
            Err(_) => skipped_lines += 1,
        }
    }

    Ok(DecodedProfile {
        profile: Profile::restore(fields[0].to_string(), total_points, goals),
        skipped_lines,
    })
}

/// File-backed profile store, one text file per profile.
///
/// The store owns only the path and the blob codec; all reads and writes
/// are single blocking whole-file operations.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Open the store at the default location (`goals.txt` under the data
    /// directory).
    pub fn open() -> Result<Self, StoreError> {
        Self::open_named("goals.txt")
    }

    /// Open the store for a named save file under the data directory.
    pub fn open_named(file_name: &str) -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join(file_name),
        })
    }

    /// Create a store with an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved profile. `Ok(None)` when the file does not exist
    /// (first run); the caller decides whether to start fresh.
    pub fn load(&self) -> Result<Option<DecodedProfile>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = std::fs::read_to_string(&self.path)?;
        decode_profile(&blob).map(Some)
    }

    /// Save the profile, replacing any previous save.
    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, encode_profile(profile))?;
        Ok(())
    }
}
