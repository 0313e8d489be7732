//! Hinted raw data provider.
//!
//! The simulator resolves contract metadata through the [`RawDataProvider`]
//! trait. [`HintedRawDataProvider`] answers those lookups from a pre-recorded
//! [`HintBundle`], checking every hint against the key that consumed it
//! before handing it out.

use tracing::{debug, error, instrument, warn};

use crate::{
    crypto::{ClassIdDeriver, GroestlClassIdDeriver},
    cursor::ReadCursor,
    error::{IntegrityViolation, Result},
    hints::{HintBundle, HintCategory, TreeKind, TreeSnapshot},
    types::{Address, ContractClass, ContractClassId, ContractInstance, Felt},
};

/// Contract metadata lookups made by the simulator.
pub trait RawDataProvider {
    fn get_contract_instance(&mut self, address: &Address) -> Result<ContractInstance>;

    fn get_contract_class(&mut self, class_id: &ContractClassId) -> Result<ContractClass>;

    fn get_initial_tree_snapshot(&self, kind: TreeKind) -> Result<TreeSnapshot>;

    fn get_initial_tree_root(&self, kind: TreeKind) -> Result<Felt> {
        self.get_initial_tree_snapshot(kind).map(|s| s.root)
    }
}

/// Whether hints are checked against the keys that consume them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerificationMode {
    /// Every lookup compares the hint with its query key.
    #[default]
    Checked,
    /// Hints are returned without address or class id checks. Cursor bounds
    /// are still enforced. Only sound when the hints are already trusted.
    Trusted,
}

/// How the contract instance cursor moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstanceCursorPolicy {
    /// Each lookup consumes one hint.
    #[default]
    Advance,
    /// Every lookup reads the first instance hint and the cursor never moves.
    Pinned,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub verification: VerificationMode,
    pub instance_cursor: InstanceCursorPolicy,
}

impl ProviderConfig {
    pub const fn trusted() -> Self {
        Self {
            verification: VerificationMode::Trusted,
            instance_cursor: InstanceCursorPolicy::Advance,
        }
    }

    pub const fn with_verification(mut self, verification: VerificationMode) -> Self {
        self.verification = verification;
        self
    }

    pub const fn with_instance_cursor(mut self, instance_cursor: InstanceCursorPolicy) -> Self {
        self.instance_cursor = instance_cursor;
        self
    }

    const fn is_checked(&self) -> bool {
        matches!(self.verification, VerificationMode::Checked)
    }
}

/// Serves simulator lookups from a borrowed [`HintBundle`].
///
/// The provider owns one [`ReadCursor`] per hint category; the bundle itself
/// is never modified and must outlive the provider. Independent providers may
/// share one bundle.
#[derive(Debug)]
pub struct HintedRawDataProvider<'a, D = GroestlClassIdDeriver> {
    hints: &'a HintBundle,
    deriver: D,
    config: ProviderConfig,
    contract_instances: ReadCursor,
    contract_classes: ReadCursor,
}

impl<'a> HintedRawDataProvider<'a> {
    pub fn new(hints: &'a HintBundle) -> Self {
        Self::with_config(hints, ProviderConfig::default())
    }

    pub fn with_config(hints: &'a HintBundle, config: ProviderConfig) -> Self {
        Self::with_deriver(hints, GroestlClassIdDeriver, config)
    }
}

impl<'a, D: ClassIdDeriver> HintedRawDataProvider<'a, D> {
    pub fn with_deriver(hints: &'a HintBundle, deriver: D, config: ProviderConfig) -> Self {
        if !config.is_checked() {
            warn!("hint verification is disabled, hints are trusted as-is");
        }
        debug!(
            contract_instances = hints.contract_instances().len(),
            contract_classes = hints.contract_classes().len(),
            trees = hints.initial_tree_snapshots().len(),
            "initialized hinted raw data provider"
        );

        Self {
            hints,
            deriver,
            config,
            contract_instances: ReadCursor::new(HintCategory::ContractInstance),
            contract_classes: ReadCursor::new(HintCategory::ContractClass),
        }
    }

    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub const fn hints(&self) -> &'a HintBundle {
        self.hints
    }

    pub const fn instance_cursor(&self) -> &ReadCursor {
        &self.contract_instances
    }

    pub const fn class_cursor(&self) -> &ReadCursor {
        &self.contract_classes
    }

    /// End-of-run check that every recorded hint was consumed.
    ///
    /// Leftover hints mean the recorded trace and the simulation diverged.
    /// Under [`InstanceCursorPolicy::Pinned`] instance hints are not counted.
    pub fn ensure_fully_consumed(&self) -> Result<()> {
        if self.config.instance_cursor == InstanceCursorPolicy::Advance {
            self.contract_instances
                .ensure_exhausted(self.hints.contract_instances())?;
        }
        self.contract_classes
            .ensure_exhausted(self.hints.contract_classes())?;

        Ok(())
    }
}

impl<D: ClassIdDeriver> RawDataProvider for HintedRawDataProvider<'_, D> {
    #[instrument(
        level = "trace",
        skip(self),
        fields(address = %address, cursor = self.contract_instances.position())
    )]
    fn get_contract_instance(&mut self, address: &Address) -> Result<ContractInstance> {
        let hints = self.hints.contract_instances();
        let (index, hint) = match self.config.instance_cursor {
            InstanceCursorPolicy::Advance => self.contract_instances.take(hints)?,
            // Pinned: always the first unread record.
            InstanceCursorPolicy::Pinned => self.contract_instances.peek(hints)?,
        };

        if self.config.is_checked() && hint.address != *address {
            let violation = IntegrityViolation::InstanceAddressMismatch {
                index,
                expected: *address,
                actual: hint.address,
            };
            error!(%violation, "rejecting contract instance hint");
            return Err(violation.into());
        }

        debug!(index, "consumed contract instance hint");
        Ok(ContractInstance {
            address: hint.address,
            salt: hint.salt,
            deployer_addr: hint.deployer,
            contract_class_id: hint.original_contract_class_id,
            initialisation_hash: hint.initialization_hash,
            public_keys: hint.public_keys.into(),
        })
    }

    #[instrument(
        level = "trace",
        skip(self),
        fields(class_id = %class_id, cursor = self.contract_classes.position())
    )]
    fn get_contract_class(&mut self, class_id: &ContractClassId) -> Result<ContractClass> {
        let (index, hint) = self.contract_classes.take(self.hints.contract_classes())?;

        if self.config.is_checked() {
            let derived = self.deriver.derive_class_id(
                &hint.artifact_hash,
                &hint.private_functions_root,
                &hint.public_bytecode_commitment,
            );
            if derived != *class_id {
                let violation = IntegrityViolation::ClassIdMismatch {
                    index,
                    expected: *class_id,
                    derived,
                };
                error!(%violation, "rejecting contract class hint");
                return Err(violation.into());
            }
        }

        debug!(
            index,
            bytecode_len = hint.packed_bytecode.len(),
            "consumed contract class hint"
        );
        Ok(ContractClass {
            artifact_hash: hint.artifact_hash,
            private_function_root: hint.private_functions_root,
            public_bytecode_commitment: hint.public_bytecode_commitment,
            packed_bytecode: hint.packed_bytecode.clone(),
        })
    }

    fn get_initial_tree_snapshot(&self, kind: TreeKind) -> Result<TreeSnapshot> {
        Ok(*self.hints.initial_tree_snapshots().get(kind)?)
    }
}
