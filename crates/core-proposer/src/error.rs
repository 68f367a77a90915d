use derive_where::derive_where;

use polybft_core_types::{Context, Height, Round};

/// The type of errors that can be yielded by the proposer calculator.
#[derive_where(Clone, Debug, PartialEq, Eq)]
#[derive(thiserror::Error)]
pub enum Error<Ctx>
where
    Ctx: Context,
{
    /// The sum of the voting powers cannot be represented
    #[error("Total voting power exceeds the maximum of {max}")]
    Overflow {
        /// Maximum allowed total voting power
        max: i64,
    },

    /// The validator set has no validators
    #[error("Validator set cannot be empty")]
    EmptyValidatorSet,

    /// The same address appears more than once in a validator set
    #[error("Duplicate validator address: {0}")]
    DuplicateAddress(Ctx::Address),

    /// Requested a proposer for a height the snapshot does not represent
    #[error("Invalid height: expected {expected}, got {actual}")]
    HeightMismatch {
        /// Height of the snapshot
        expected: Height,
        /// Requested height
        actual: Height,
    },

    /// Requested a proposer for the nil round
    #[error("Invalid round: {0}")]
    InvalidRound(Round),

    /// Asked to increment proposer priorities zero times
    #[error("Cannot increment proposer priorities zero times")]
    ZeroIncrement,
}

impl<Ctx> Error<Ctx>
where
    Ctx: Context,
{
    /// Whether the error denotes a structurally invalid validator set.
    pub fn is_invalid_set(&self) -> bool {
        matches!(self, Self::EmptyValidatorSet | Self::DuplicateAddress(_))
    }
}
