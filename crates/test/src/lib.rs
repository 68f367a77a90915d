#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod address;
mod context;
mod genesis;
mod public_key;

pub mod utils;

pub use crate::address::*;
pub use crate::context::*;
pub use crate::genesis::*;
pub use crate::public_key::*;

use polybft_core_types::{ValidatorMetadata, VotingPower};

/// A validator with the address `[byte, 0, .., 0]` and a public key derived from the same byte.
pub fn validator(byte: u8, voting_power: VotingPower) -> ValidatorMetadata<TestContext> {
    ValidatorMetadata::new(
        Address::from_byte(byte),
        PublicKey::new([byte; PublicKey::LENGTH]),
        voting_power,
    )
}
