//! # Questlog Core Library
//!
//! This library provides the core business logic for Questlog, a personal
//! goal tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary; the core stays free of
//! terminal and prompt concerns.
//!
//! ## Architecture
//!
//! - **Goal model**: three reward shapes (simple, eternal, checklist) with
//!   per-shape event-recording rules
//! - **Profile**: ordered goal collection plus the cumulative point ledger
//! - **Storage**: line-oriented text persistence for profiles and
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Goal`]: a trackable objective with a reward rule and completion state
//! - [`Profile`]: owner of the goal collection and total points
//! - [`ProfileStore`]: load/save of whole profiles as text blobs
//! - [`Config`]: application configuration management

pub mod error;
pub mod goal;
pub mod profile;
pub mod storage;

pub use error::{CodecError, ConfigError, CoreError, ProfileError, StoreError};
pub use goal::{Goal, GoalKind};
pub use profile::{Profile, POINTS_PER_LEVEL};
pub use storage::{data_dir, Config, DecodedProfile, ProfileStore};
