//! Error types for LeadPulse

use thiserror::Error;

use crate::types::{CampaignId, CampaignStatus};

/// Main error type for campaign tracking operations
#[derive(Error, Debug)]
pub enum CampaignError {
    /// A campaign is still sending; only one may be tracked at a time
    #[error("Campaign already active: {0}")]
    AlreadyActive(CampaignId),

    /// Draft or restored record violates the snapshot invariants
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Requested status change is not part of the lifecycle
    #[error("Invalid transition to {0}")]
    InvalidTransition(CampaignStatus),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization of the cached record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CampaignError
pub type CampaignResult<T> = Result<T, CampaignError>;
