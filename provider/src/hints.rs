//! The hint bundle: pre-recorded contract data and genesis tree snapshots.
//!
//! A [`HintBundle`] is built once per simulation run from records that were
//! already deserialized by the trace recorder. It has no mutators, so it can be
//! shared by reference across threads while each consumer keeps its own
//! cursors.

use ahash::AHashMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter};

use crate::{
    error::ConfigurationError,
    types::{Address, ContractClassId, Felt, Point, PublicKeys},
};

/// The two kinds of hints that are consumed through a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HintCategory {
    #[strum(to_string = "contract instance")]
    ContractInstance,
    #[strum(to_string = "contract class")]
    ContractClass,
}

/// Public keys exactly as the trace recorder wrote them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicKeysHint {
    pub master_nullifier_public_key: Point,
    pub master_incoming_viewing_public_key: Point,
    pub master_outgoing_viewing_public_key: Point,
    pub master_tagging_public_key: Point,
}

impl From<PublicKeysHint> for PublicKeys {
    fn from(hint: PublicKeysHint) -> Self {
        Self {
            nullifier_key: hint.master_nullifier_public_key,
            incoming_viewing_key: hint.master_incoming_viewing_public_key,
            outgoing_viewing_key: hint.master_outgoing_viewing_public_key,
            tagging_key: hint.master_tagging_public_key,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractInstanceHint {
    pub address: Address,
    /// Whether the instance was found when the trace was recorded.
    pub exists: bool,
    pub salt: Felt,
    pub deployer: Address,
    /// Class the instance points to after any upgrades.
    pub current_contract_class_id: ContractClassId,
    /// Class the instance was deployed with.
    pub original_contract_class_id: ContractClassId,
    pub initialization_hash: Felt,
    pub public_keys: PublicKeysHint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractClassHint {
    pub artifact_hash: Felt,
    pub private_functions_root: Felt,
    pub public_bytecode_commitment: Felt,
    pub packed_bytecode: Vec<u8>,
}

/// Indexed trees whose genesis state the simulator starts from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    EnumIter,
)]
#[num_enum(error_type(name = ConfigurationError, constructor = ConfigurationError::UnknownTreeKind))]
#[repr(u8)]
pub enum TreeKind {
    #[strum(to_string = "note hash")]
    NoteHash = 0,
    #[strum(to_string = "nullifier")]
    Nullifier = 1,
    #[strum(to_string = "public data")]
    PublicData = 2,
    #[strum(to_string = "L1 to L2 message")]
    L1ToL2Message = 3,
}

/// State of one tree at the start of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub root: Felt,
    pub next_available_leaf_index: u64,
}

impl TreeSnapshot {
    pub const fn new(root: Felt, next_available_leaf_index: u64) -> Self {
        Self {
            root,
            next_available_leaf_index,
        }
    }
}

/// Genesis snapshots keyed by tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeSnapshots {
    snapshots: AHashMap<TreeKind, TreeSnapshot>,
}

impl TreeSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a complete set, one snapshot per tree in discriminant order.
    pub fn from_array(snapshots: [TreeSnapshot; 4]) -> Self {
        let kinds = [
            TreeKind::NoteHash,
            TreeKind::Nullifier,
            TreeKind::PublicData,
            TreeKind::L1ToL2Message,
        ];
        Self {
            snapshots: kinds.into_iter().zip(snapshots).collect(),
        }
    }

    /// Records the snapshot for `kind`, returning the one it replaces.
    ///
    /// Only usable while the set is still owned by its builder; once moved
    /// into a [`HintBundle`] it can no longer change.
    pub fn insert(&mut self, kind: TreeKind, snapshot: TreeSnapshot) -> Option<TreeSnapshot> {
        self.snapshots.insert(kind, snapshot)
    }

    pub fn get(&self, kind: TreeKind) -> Result<&TreeSnapshot, ConfigurationError> {
        self.snapshots
            .get(&kind)
            .ok_or(ConfigurationError::MissingTreeSnapshot(kind))
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// All hints recorded for one simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintBundle {
    contract_instances: Vec<ContractInstanceHint>,
    contract_classes: Vec<ContractClassHint>,
    initial_tree_snapshots: TreeSnapshots,
}

impl HintBundle {
    pub fn new(
        contract_instances: Vec<ContractInstanceHint>,
        contract_classes: Vec<ContractClassHint>,
        initial_tree_snapshots: TreeSnapshots,
    ) -> Self {
        Self {
            contract_instances,
            contract_classes,
            initial_tree_snapshots,
        }
    }

    /// Contract instance hints in recorded order.
    pub fn contract_instances(&self) -> &[ContractInstanceHint] {
        &self.contract_instances
    }

    /// Contract class hints in recorded order.
    pub fn contract_classes(&self) -> &[ContractClassHint] {
        &self.contract_classes
    }

    pub const fn initial_tree_snapshots(&self) -> &TreeSnapshots {
        &self.initial_tree_snapshots
    }
}
