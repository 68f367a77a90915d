use alloc::vec::Vec;

use derive_where::derive_where;

use polybft_core_types::{Context, Height, Round, ValidatorMetadata};

use crate::{Validator, ValidatorSet};

/// The state of the proposer election at a given height.
///
/// Holds the validators with their priorities at the start of the height,
/// along with the last computed round and its proposer, if any.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct ProposerCalculatorSnapshot<Ctx>
where
    Ctx: Context,
{
    pub(crate) height: Height,
    pub(crate) round: Round,
    pub(crate) proposer: Option<Validator<Ctx>>,
    pub(crate) validators: Vec<Validator<Ctx>>,
}

impl<Ctx> ProposerCalculatorSnapshot<Ctx>
where
    Ctx: Context,
{
    /// A snapshot at the given height where every validator starts with a priority of 0.
    pub fn new(
        height: Height,
        validators: impl IntoIterator<Item = ValidatorMetadata<Ctx>>,
    ) -> Self {
        Self::from_validators(height, validators.into_iter().map(Validator::new).collect())
    }

    /// A snapshot at the given height, keeping the priorities of the validators.
    pub fn from_validators(height: Height, validators: Vec<Validator<Ctx>>) -> Self {
        Self {
            height,
            round: Round::Nil,
            proposer: None,
            validators,
        }
    }

    /// A snapshot at the given height, starting from the priorities of the validator set.
    pub fn from_validator_set(height: Height, validator_set: ValidatorSet<Ctx>) -> Self {
        Self::from_validators(height, validator_set.into_validators())
    }

    /// The height the snapshot is valid for.
    pub fn height(&self) -> Height {
        self.height
    }

    /// The last round whose proposer was computed, [`Round::Nil`] if none.
    pub fn round(&self) -> Round {
        self.round
    }

    /// The proposer selected at the last computed round,
    /// with its priority right after its selection.
    pub fn proposer(&self) -> Option<&Validator<Ctx>> {
        self.proposer.as_ref()
    }

    /// The validators with their priorities at the start of the height, in order.
    pub fn validators(&self) -> &[Validator<Ctx>] {
        &self.validators
    }
}

#[cfg(test)]
mod tests {
    use polybft_test::{validator, TestContext};

    use super::*;

    #[test]
    fn new_snapshot() {
        let snapshot: ProposerCalculatorSnapshot<TestContext> =
            ProposerCalculatorSnapshot::new(Height::new(3), [validator(1, 5), validator(2, 7)]);

        assert_eq!(snapshot.height(), Height::new(3));
        assert_eq!(snapshot.round(), Round::Nil);
        assert!(snapshot.proposer().is_none());
        assert_eq!(snapshot.validators().len(), 2);
        assert!(snapshot.validators().iter().all(|v| v.proposer_priority == 0));
    }

    #[test]
    fn from_validator_set_keeps_priorities() {
        let set = ValidatorSet::from_validators(alloc::vec![
            Validator::with_priority(validator(1, 1), 4),
            Validator::with_priority(validator(2, 1), -4),
        ])
        .unwrap();

        let snapshot = ProposerCalculatorSnapshot::from_validator_set(Height::ZERO, set.clone());

        assert_eq!(snapshot.validators(), set.validators());
    }
}
