//! Hint-driven raw data access for the VM simulator.
//!
//! During simulation the VM needs contract instances, contract classes and the
//! genesis roots of the indexed trees. Instead of walking live storage it
//! reads them from a [`HintBundle`] recorded by an earlier tracing pass. The
//! [`HintedRawDataProvider`] consumes those hints in recorded order and checks
//! each one against the key it was requested with:
//!
//! - an instance hint must carry the requested address;
//! - a class hint must derive, through a [`ClassIdDeriver`], to the requested
//!   class id.
//!
//! Any mismatch or over-read is an [`IntegrityViolation`] and ends the run.

mod crypto;
mod cursor;
mod error;
mod hints;
mod provider;
mod types;
pub mod util;

pub use crypto::{ClassIdDeriver, GroestlClassIdDeriver, CONTRACT_CLASS_ID_SEPARATOR};
pub use cursor::ReadCursor;
pub use error::{ConfigurationError, IntegrityViolation, RawDataError, Result};
pub use hints::{
    ContractClassHint, ContractInstanceHint, HintBundle, HintCategory, PublicKeysHint, TreeKind,
    TreeSnapshot, TreeSnapshots,
};
pub use provider::{
    HintedRawDataProvider, InstanceCursorPolicy, ProviderConfig, RawDataProvider,
    VerificationMode,
};
pub use types::{
    Address, ContractClass, ContractClassId, ContractInstance, Felt, Point, PublicKeys, FELT_BYTES,
};
