//! Content-derived identifiers for contract classes.

use binius_hash::{groestl::Groestl256ByteCompression, PseudoCompressionFunction};
use generic_array::GenericArray;

use crate::types::{ContractClassId, Felt, FELT_BYTES};

/// Domain separator mixed in before the class fields.
pub const CONTRACT_CLASS_ID_SEPARATOR: Felt = Felt::from_u64(0x636c_6173_735f_6964);

/// Derives the canonical [`ContractClassId`] of a contract class from its
/// committed fields.
///
/// Implementations must be pure: the same inputs always yield the same id.
pub trait ClassIdDeriver {
    fn derive_class_id(
        &self,
        artifact_hash: &Felt,
        private_function_root: &Felt,
        public_bytecode_commitment: &Felt,
    ) -> ContractClassId;
}

impl<D: ClassIdDeriver + ?Sized> ClassIdDeriver for &D {
    fn derive_class_id(
        &self,
        artifact_hash: &Felt,
        private_function_root: &Felt,
        public_bytecode_commitment: &Felt,
    ) -> ContractClassId {
        (**self).derive_class_id(artifact_hash, private_function_root, public_bytecode_commitment)
    }
}

/// Chains the Groestl-256 byte compression over the separator and the three
/// class fields:
///
/// `id = C(C(C(sep, artifact_hash), private_function_root), public_bytecode_commitment)`
#[derive(Debug, Clone, Copy, Default)]
pub struct GroestlClassIdDeriver;

impl GroestlClassIdDeriver {
    fn compress(left: &Felt, right: &Felt) -> Felt {
        let compression = Groestl256ByteCompression::default();
        let left = GenericArray::from_slice(left.as_bytes());
        let right = GenericArray::from_slice(right.as_bytes());
        let digest = compression.compress([*left, *right]);

        let mut bytes = [0u8; FELT_BYTES];
        bytes.copy_from_slice(digest.as_slice());
        Felt::from_bytes(bytes)
    }
}

impl ClassIdDeriver for GroestlClassIdDeriver {
    fn derive_class_id(
        &self,
        artifact_hash: &Felt,
        private_function_root: &Felt,
        public_bytecode_commitment: &Felt,
    ) -> ContractClassId {
        let acc = Self::compress(&CONTRACT_CLASS_ID_SEPARATOR, artifact_hash);
        let acc = Self::compress(&acc, private_function_root);
        ContractClassId::new(Self::compress(&acc, public_bytecode_commitment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let deriver = GroestlClassIdDeriver;
        let (a, b, c) = (Felt::from_u64(1), Felt::from_u64(2), Felt::from_u64(3));
        assert_eq!(
            deriver.derive_class_id(&a, &b, &c),
            deriver.derive_class_id(&a, &b, &c)
        );
    }

    #[test]
    fn test_derivation_depends_on_field_order() {
        let deriver = GroestlClassIdDeriver;
        let (a, b, c) = (Felt::from_u64(1), Felt::from_u64(2), Felt::from_u64(3));
        let id = deriver.derive_class_id(&a, &b, &c);
        assert_ne!(id, deriver.derive_class_id(&b, &a, &c));
        assert_ne!(id, deriver.derive_class_id(&a, &c, &b));
        assert_ne!(id, deriver.derive_class_id(&a, &b, &a));
    }
}
