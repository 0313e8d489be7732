//! Error types for the hinted raw data provider.

use thiserror::Error;

use crate::{
    hints::{HintCategory, TreeKind},
    types::{Address, ContractClassId},
};

/// Errors that can occur while serving simulator lookups.
///
/// Both variants are terminal for the simulation run: there is no fallback
/// data source to retry against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawDataError {
    /// A hint did not match the query that consumed it
    #[error("Integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),

    /// The caller asked for something the bundle was never set up to answer
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl RawDataError {
    pub const fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

/// The hint stream is corrupted, forged or mis-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("{category} hints exhausted: requested hint #{index} but only {len} were recorded")]
    HintsExhausted {
        category: HintCategory,
        index: usize,
        len: usize,
    },

    #[error("contract instance hint #{index} is for address {actual}, but {expected} was requested")]
    InstanceAddressMismatch {
        index: usize,
        expected: Address,
        actual: Address,
    },

    #[error("contract class hint #{index} derives class id {derived}, but {expected} was requested")]
    ClassIdMismatch {
        index: usize,
        expected: ContractClassId,
        derived: ContractClassId,
    },

    #[error("only {consumed} of {len} {category} hints were consumed")]
    UnconsumedHints {
        category: HintCategory,
        consumed: usize,
        len: usize,
    },
}

/// Caller or collaborator misuse, as opposed to bad hint data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no initial snapshot was recorded for the {0} tree")]
    MissingTreeSnapshot(TreeKind),

    #[error("unknown tree kind {0}")]
    UnknownTreeKind(u8),
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, RawDataError>;
