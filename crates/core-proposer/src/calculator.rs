use derive_where::derive_where;
use tracing::{debug, trace};

use polybft_core_types::{Context, Height, Round, ValidatorMetadata};

use crate::priority;
use crate::update::reconcile;
use crate::validator_set::validate;
use crate::{Error, ProposerCalculatorSnapshot, Validator, ValidatorSet};

/// Computes the proposer of every round, height after height.
///
/// The calculator owns the snapshot of the current height. Queried rounds are
/// computed from the priorities the height started with, which only move
/// forward when a block is committed.
#[derive_where(Clone, Debug)]
pub struct ProposerCalculator<Ctx>
where
    Ctx: Context,
{
    snapshot: ProposerCalculatorSnapshot<Ctx>,
    total_voting_power: i64,
}

impl<Ctx> ProposerCalculator<Ctx>
where
    Ctx: Context,
{
    /// Create a new calculator from a snapshot.
    ///
    /// # Errors
    /// If the validators of the snapshot do not form a valid validator set.
    pub fn new(snapshot: ProposerCalculatorSnapshot<Ctx>) -> Result<Self, Error<Ctx>> {
        let total_voting_power = validate(snapshot.validators.iter().map(|v| &v.metadata))?;

        Ok(Self {
            snapshot,
            total_voting_power,
        })
    }

    /// Create a new calculator at the given height from a validator set.
    pub fn from_validator_set(height: Height, validator_set: ValidatorSet<Ctx>) -> Self {
        let total_voting_power = validator_set.total_voting_power();

        Self {
            snapshot: ProposerCalculatorSnapshot::from_validator_set(height, validator_set),
            total_voting_power,
        }
    }

    /// The snapshot of the current height.
    pub fn snapshot(&self) -> &ProposerCalculatorSnapshot<Ctx> {
        &self.snapshot
    }

    /// The total voting power of the current validators.
    pub fn total_voting_power(&self) -> i64 {
        self.total_voting_power
    }

    /// The current height.
    pub fn height(&self) -> Height {
        self.snapshot.height
    }

    /// The current validators with their priorities at the start of the height.
    pub fn validators(&self) -> &[Validator<Ctx>] {
        &self.snapshot.validators
    }

    /// The last selected proposer, if any.
    pub fn proposer(&self) -> Option<&Validator<Ctx>> {
        self.snapshot.proposer()
    }

    /// Compute the proposer for the given round at the given height.
    ///
    /// The proposer of round `r` is selected after `r + 1` increments of the
    /// priorities the height started with, so rounds can be queried in any order.
    /// The starting priorities are left untouched, the last computed round is cached.
    ///
    /// # Errors
    /// - [`Error::HeightMismatch`] if `height` is not the height of the snapshot
    /// - [`Error::InvalidRound`] if `round` is [`Round::Nil`]
    pub fn calc_proposer(
        &mut self,
        round: Round,
        height: Height,
    ) -> Result<Ctx::Address, Error<Ctx>> {
        self.check_height(height)?;
        let steps = steps_to(round)?;

        if round == self.snapshot.round {
            if let Some(proposer) = &self.snapshot.proposer {
                return Ok(proposer.address().clone());
            }
        }

        let mut validators = self.snapshot.validators.clone();
        let index = priority::increment_proposer_priority_n_times(
            &mut validators,
            self.total_voting_power,
            steps,
        )?;

        let proposer = validators
            .into_iter()
            .nth(index)
            .ok_or(Error::EmptyValidatorSet)?;

        trace!(%height, %round, address = %proposer.address(), "Computed proposer");

        let address = proposer.address().clone();
        self.snapshot.round = round;
        self.snapshot.proposer = Some(proposer);

        Ok(address)
    }

    /// The proposer computed for exactly this round and height, if any.
    pub fn get_latest_proposer(&self, round: Round, height: Height) -> Option<&Ctx::Address> {
        if round.is_nil() || round != self.snapshot.round || height != self.snapshot.height {
            return None;
        }

        self.snapshot.proposer().map(Validator::address)
    }

    /// Move the priorities the height started with forward by `times` rounds,
    /// as happens when a block is committed at round `times - 1`.
    ///
    /// The validator selected last is cached as the proposer of round `times - 1`.
    ///
    /// # Errors
    /// [`Error::ZeroIncrement`] if `times` is 0.
    pub(crate) fn increment_proposer_priority_n_times(
        &mut self,
        times: u64,
    ) -> Result<(), Error<Ctx>> {
        let index = priority::increment_proposer_priority_n_times(
            &mut self.snapshot.validators,
            self.total_voting_power,
            times,
        )?;

        self.snapshot.round = u32::try_from(times - 1)
            .map(Round::new)
            .unwrap_or(Round::new(u32::MAX));
        self.snapshot.proposer = self.snapshot.validators.get(index).cloned();

        Ok(())
    }

    /// Replace the validators with a new validator set.
    ///
    /// Validators staying in the set keep their priority, new validators
    /// start with a negative one. The height is kept, no round is computed anymore.
    ///
    /// # Errors
    /// If the new validators do not form a valid validator set,
    /// in which case the calculator is left untouched.
    pub fn update_validators(
        &mut self,
        validators: &[ValidatorMetadata<Ctx>],
    ) -> Result<(), Error<Ctx>> {
        let reconciled = reconcile(&self.snapshot.validators, validators)?;

        debug!(
            height = %self.snapshot.height,
            previous = self.snapshot.validators.len(),
            current = reconciled.validators.len(),
            total_voting_power = reconciled.total_voting_power,
            "Updated validator set"
        );

        self.snapshot.validators = reconciled.validators;
        self.snapshot.round = Round::Nil;
        self.snapshot.proposer = None;
        self.total_voting_power = reconciled.total_voting_power;

        Ok(())
    }

    /// Commit the block finalized at the given height and round.
    ///
    /// Advances the starting priorities of the height by `round + 1` increments,
    /// applies the validator set change recorded in the block if any,
    /// and moves on to the next height.
    ///
    /// # Errors
    /// - [`Error::HeightMismatch`] if `height` is not the height of the snapshot
    /// - [`Error::InvalidRound`] if `round` is [`Round::Nil`]
    /// - any error of [`update_validators`](Self::update_validators)
    ///
    /// On error the calculator is left untouched.
    pub fn update_to_block(
        &mut self,
        height: Height,
        round: Round,
        validators: Option<&[ValidatorMetadata<Ctx>]>,
    ) -> Result<(), Error<Ctx>> {
        self.check_height(height)?;
        let steps = steps_to(round)?;

        let mut next = self.clone();
        next.increment_proposer_priority_n_times(steps)?;

        if let Some(validators) = validators {
            next.update_validators(validators)?;
        }

        next.snapshot.height = height.increment();
        next.snapshot.round = Round::Nil;
        next.snapshot.proposer = None;

        *self = next;

        debug!(%height, %round, next = %self.snapshot.height, "Committed block");

        Ok(())
    }

    fn check_height(&self, height: Height) -> Result<(), Error<Ctx>> {
        if height != self.snapshot.height {
            return Err(Error::HeightMismatch {
                expected: self.snapshot.height,
                actual: height,
            });
        }

        Ok(())
    }
}

/// Number of increments from the start of a height to the selection of `round`'s proposer.
fn steps_to<Ctx>(round: Round) -> Result<u64, Error<Ctx>>
where
    Ctx: Context,
{
    match round {
        Round::Nil => Err(Error::InvalidRound(round)),
        Round::Some(r) => Ok(u64::from(r) + 1),
    }
}
