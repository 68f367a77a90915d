use derive_where::derive_where;

use polybft_core_types::{Context, ProposerPriority, ValidatorMetadata, VotingPower};

/// A validator together with its proposer priority.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct Validator<Ctx>
where
    Ctx: Context,
{
    /// Identity and stake of the validator.
    pub metadata: ValidatorMetadata<Ctx>,

    /// The priority of the validator to become the next proposer.
    pub proposer_priority: ProposerPriority,
}

impl<Ctx> Validator<Ctx>
where
    Ctx: Context,
{
    /// A validator newly introduced to the proposer election, with a priority of 0.
    pub fn new(metadata: ValidatorMetadata<Ctx>) -> Self {
        Self::with_priority(metadata, 0)
    }

    /// A validator with the given proposer priority.
    pub fn with_priority(
        metadata: ValidatorMetadata<Ctx>,
        proposer_priority: ProposerPriority,
    ) -> Self {
        Self {
            metadata,
            proposer_priority,
        }
    }

    /// The address of the validator.
    pub fn address(&self) -> &Ctx::Address {
        &self.metadata.address
    }

    /// The public key of the validator.
    pub fn public_key(&self) -> &Ctx::PublicKey {
        &self.metadata.public_key
    }

    /// The voting power held by the validator.
    pub fn voting_power(&self) -> VotingPower {
        self.metadata.voting_power
    }

    /// The voting power as a signed quantity, for priority bookkeeping.
    ///
    /// Voting powers are bounded by the total voting power check,
    /// values above `i64::MAX` can only be seen on unchecked input and clip.
    pub(crate) fn signed_voting_power(&self) -> i64 {
        i64::try_from(self.metadata.voting_power).unwrap_or(i64::MAX)
    }
}
