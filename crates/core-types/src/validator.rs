use core::fmt::{Debug, Display};
use core::hash::Hash;

use derive_where::derive_where;

use crate::Context;

/// Voting power held by a validator.
pub type VotingPower = u64;

/// Accumulator deciding which validator proposes next.
pub type ProposerPriority = i64;

/// Defines the requirements for an address.
///
/// # Important
/// The `Ord` implementation must compare the fixed-width byte representation
/// lexicographically, as it decides which validator proposes when several
/// validators share the highest priority.
pub trait Address
where
    Self: Clone + Debug + Display + Eq + Ord + Hash + Send + Sync,
{
}

/// Defines the requirements for a public key.
///
/// Public keys are opaque: they are carried along with the validator
/// and never inspected.
pub trait PublicKey
where
    Self: Clone + Debug + Eq + Send + Sync,
{
}

/// The identity and stake of a validator, as recorded on chain.
#[derive_where(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "Ctx::Address: serde::Serialize, Ctx::PublicKey: serde::Serialize",
        deserialize = "Ctx::Address: serde::Deserialize<'de>, Ctx::PublicKey: serde::Deserialize<'de>"
    ))
)]
pub struct ValidatorMetadata<Ctx>
where
    Ctx: Context,
{
    /// The address of the validator.
    pub address: Ctx::Address,

    /// The public key of the validator.
    pub public_key: Ctx::PublicKey,

    /// The voting power held by the validator.
    pub voting_power: VotingPower,
}

impl<Ctx> ValidatorMetadata<Ctx>
where
    Ctx: Context,
{
    /// Create a new validator entry.
    pub fn new(
        address: Ctx::Address,
        public_key: Ctx::PublicKey,
        voting_power: VotingPower,
    ) -> Self {
        Self {
            address,
            public_key,
            voting_power,
        }
    }
}
