//! Error types for the allocation library
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

/// Result type alias for allocation operations
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Errors that can occur while allocating treasures
#[derive(Error, Debug)]
pub enum AllocationError {
    /// Manual allocation called with mismatched input lengths
    #[error("owner mapping length mismatch: {treasures} treasures, {owners} owner names")]
    OwnerCountMismatch { treasures: usize, owners: usize },

    /// Input exceeds the configured size guard for the exhaustive search
    #[error("too many treasures for exhaustive search: {count} (limit {limit})")]
    TooManyTreasures { count: usize, limit: usize },

    /// The search ran past its exploration budget
    #[error("search budget exceeded: explored {explored} states, budget {budget}")]
    SearchBudgetExceeded { explored: u64, budget: u64 },

    /// Report serialization error
    #[error("report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}
