#![allow(dead_code)]

use hintsim_provider::{
    Address, ClassIdDeriver, ContractClassHint, ContractClassId, ContractInstanceHint, Felt,
    GroestlClassIdDeriver, Point, PublicKeysHint, TreeSnapshot, TreeSnapshots,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn point(seed: u64) -> Point {
    Point::new(Felt::from_u64(seed), Felt::from_u64(seed + 1))
}

pub fn public_keys(seed: u64) -> PublicKeysHint {
    PublicKeysHint {
        master_nullifier_public_key: point(seed),
        master_incoming_viewing_public_key: point(seed + 10),
        master_outgoing_viewing_public_key: point(seed + 20),
        master_tagging_public_key: point(seed + 30),
    }
}

/// Instance hint with the given address and fixed field values.
pub fn instance_hint(address: u64) -> ContractInstanceHint {
    ContractInstanceHint {
        address: Address::from(address),
        exists: true,
        salt: Felt::from_u64(5),
        deployer: Address::from(2),
        current_contract_class_id: ContractClassId::from(9),
        original_contract_class_id: ContractClassId::from(9),
        initialization_hash: Felt::from_u64(7),
        public_keys: public_keys(1_000),
    }
}

/// Class hint with random committed fields and bytecode.
pub fn random_class_hint(rng: &mut StdRng) -> ContractClassHint {
    let bytecode_len = rng.random_range(0..64);
    ContractClassHint {
        artifact_hash: Felt::from_bytes(rng.random()),
        private_functions_root: Felt::from_bytes(rng.random()),
        public_bytecode_commitment: Felt::from_bytes(rng.random()),
        packed_bytecode: (0..bytecode_len).map(|_| rng.random()).collect(),
    }
}

pub fn random_class_hints(count: usize, seed: u64) -> Vec<ContractClassHint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_class_hint(&mut rng)).collect()
}

/// Id the default deriver assigns to `hint`.
pub fn class_id_of(hint: &ContractClassHint) -> ContractClassId {
    GroestlClassIdDeriver.derive_class_id(
        &hint.artifact_hash,
        &hint.private_functions_root,
        &hint.public_bytecode_commitment,
    )
}

pub fn genesis_snapshots() -> TreeSnapshots {
    TreeSnapshots::from_array([
        TreeSnapshot::new(Felt::from_u64(0x1111), 64),
        TreeSnapshot::new(Felt::from_u64(0x2222), 128),
        TreeSnapshot::new(Felt::from_u64(0x3333), 256),
        TreeSnapshot::new(Felt::from_u64(0x4444), 0),
    ])
}
