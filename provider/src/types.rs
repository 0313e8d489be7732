//! Value types handed to the simulator.
//!
//! Everything in here is a plain value object: the simulator owns what it
//! receives and nothing points back into the hint bundle.

use std::fmt;

/// Number of bytes in a field element.
pub const FELT_BYTES: usize = 32;

/// A fixed-width field element, stored as its big-endian byte encoding.
///
/// The provider never does arithmetic on field elements, it only compares
/// them and feeds them to the class id derivation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Felt([u8; FELT_BYTES]);

impl Felt {
    pub const ZERO: Self = Self([0; FELT_BYTES]);

    pub const fn from_bytes(bytes: [u8; FELT_BYTES]) -> Self {
        Self(bytes)
    }

    /// Embeds a `u64` in the low-order bytes.
    pub const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; FELT_BYTES];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[FELT_BYTES - 8 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; FELT_BYTES] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; FELT_BYTES] {
        self.0
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<[u8; FELT_BYTES]> for Felt {
    fn from(bytes: [u8; FELT_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::LowerHex for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({self:#x})")
    }
}

macro_rules! felt_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub Felt);

        impl $name {
            pub const fn new(felt: Felt) -> Self {
                Self(felt)
            }

            pub const fn felt(&self) -> &Felt {
                &self.0
            }
        }

        impl From<Felt> for $name {
            fn from(felt: Felt) -> Self {
                Self(felt)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(Felt::from_u64(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:#x})"), self.0)
            }
        }
    };
}

felt_newtype!(
    /// Address of a deployed contract.
    Address
);

felt_newtype!(
    /// Content-derived identifier of a contract class.
    ContractClassId
);

/// An affine point on the key curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Felt,
    pub y: Felt,
    pub is_infinite: bool,
}

impl Point {
    pub const fn new(x: Felt, y: Felt) -> Self {
        Self {
            x,
            y,
            is_infinite: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PublicKeys {
    pub nullifier_key: Point,
    pub incoming_viewing_key: Point,
    pub outgoing_viewing_key: Point,
    pub tagging_key: Point,
}

/// The simulator's view of a deployed contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContractInstance {
    pub address: Address,
    pub salt: Felt,
    pub deployer_addr: Address,
    pub contract_class_id: ContractClassId,
    pub initialisation_hash: Felt,
    pub public_keys: PublicKeys,
}

/// A contract class as seen by the simulator.
///
/// Its identity is the [`ContractClassId`] derived from the first three
/// fields; `packed_bytecode` is carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContractClass {
    pub artifact_hash: Felt,
    pub private_function_root: Felt,
    pub public_bytecode_commitment: Felt,
    pub packed_bytecode: Vec<u8>,
}
