//! plunder - balanced treasure allocation engine
//!
//! This library splits a fixed list of valued treasures among a crew of
//! three pirates so that two of them receive provably equal total value,
//! and checks whether an existing allocation is balanced.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): re-exports only, no consumer concerns
//! - **models**: core data structures (Treasure, Pirate, BalancedSplit)
//! - **error**: error types using thiserror
//! - **config**: guards for the exponential split search
//! - **crew**: manual crew assembly from an owner mapping
//! - **balance**: allocation balance checking
//! - **split**: the balanced-split engine and bipartition heuristic
//! - **report**: per-run search reports
//!
//! Everything is a pure, synchronous, in-memory computation. The only
//! resource controls are the [`SplitConfig`] guards on the exhaustive
//! search, which is exponential by construction and meant for small crews
//! and small hoards.

pub mod balance;
pub mod config;
pub mod crew;
pub mod error;
pub mod models;
pub mod report;
pub mod split;

// Re-export commonly used types
pub use balance::is_balanced;
pub use config::SplitConfig;
pub use crew::crew_from_mapping;
pub use error::{AllocationError, Result};
pub use models::{BalancedSplit, Pirate, Treasure, CAPTAIN, FIRST_MATE, QUARTERMASTER};
pub use report::SplitReport;
pub use split::{balanced_split, balanced_split_with, split_in_two};

/// Version of the plunder library
pub const VERSION: &str = "0.1.0";
