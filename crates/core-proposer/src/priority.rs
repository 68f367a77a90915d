//! The proposer priority algorithm.
//!
//! All functions operate in place on an ordered list of validators.
//! The order only matters for the returned indices: selection itself
//! depends on priorities and addresses alone.

use polybft_core_types::Context;
use tracing::trace;

use crate::arith::{saturating_add, saturating_sub};
use crate::{Error, Validator};

/// Bound on the spread of the priorities, as a multiple of the total voting power.
pub const PRIORITY_WINDOW_SIZE_FACTOR: i64 = 2;

/// Advance the priorities by one round.
///
/// Every priority grows by the validator's voting power, then the validator
/// with the highest priority is selected and pays the total voting power.
///
/// Returns the index of the selected validator, or `None` if there are no validators.
pub fn increment_proposer_priority<Ctx>(
    validators: &mut [Validator<Ctx>],
    total_voting_power: i64,
) -> Option<usize>
where
    Ctx: Context,
{
    for validator in validators.iter_mut() {
        validator.proposer_priority =
            saturating_add(validator.proposer_priority, validator.signed_voting_power());
    }

    let index = most_priority_index(validators)?;
    let proposer = validators.get_mut(index)?;

    proposer.proposer_priority = saturating_sub(proposer.proposer_priority, total_voting_power);

    trace!(
        address = %proposer.address(),
        priority = proposer.proposer_priority,
        "Selected proposer"
    );

    Some(index)
}

/// Rescale and center the priorities, then advance them by `times` rounds.
///
/// Returns the index of the validator selected at the last round.
pub fn increment_proposer_priority_n_times<Ctx>(
    validators: &mut [Validator<Ctx>],
    total_voting_power: i64,
    times: u64,
) -> Result<usize, Error<Ctx>>
where
    Ctx: Context,
{
    if validators.is_empty() {
        return Err(Error::EmptyValidatorSet);
    }

    if times == 0 {
        return Err(Error::ZeroIncrement);
    }

    // Cap the difference between priorities to be proportional to 2 * total voting power
    rescale_priorities(
        validators,
        PRIORITY_WINDOW_SIZE_FACTOR.saturating_mul(total_voting_power),
    );
    center_priorities(validators);

    let mut proposer = None;
    for _ in 0..times {
        proposer = increment_proposer_priority(validators, total_voting_power);
    }

    proposer.ok_or(Error::EmptyValidatorSet)
}

/// Index of the validator with the highest priority.
///
/// Ties are broken in favor of the validator with the smallest address.
pub fn most_priority_index<Ctx>(validators: &[Validator<Ctx>]) -> Option<usize>
where
    Ctx: Context,
{
    validators
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.proposer_priority
                .cmp(&b.proposer_priority)
                .then_with(|| b.address().cmp(a.address()))
        })
        .map(|(index, _)| index)
}

/// Divide every priority by `ceil(diff / diff_max)` when the spread `diff`
/// between the highest and the lowest priority exceeds `diff_max`.
///
/// Divisions truncate toward zero. Does nothing if `diff_max <= 0`.
pub fn rescale_priorities<Ctx>(validators: &mut [Validator<Ctx>], diff_max: i64)
where
    Ctx: Context,
{
    if diff_max <= 0 {
        return;
    }

    let diff = i128::from(max_min_priority_diff(validators));
    let diff_max = i128::from(diff_max);

    if diff <= diff_max {
        return;
    }

    let ratio = (diff + diff_max - 1) / diff_max;

    for validator in validators.iter_mut() {
        // |priority / ratio| <= |priority|, the result always fits
        validator.proposer_priority = (i128::from(validator.proposer_priority) / ratio) as i64;
    }

    trace!(%ratio, "Rescaled proposer priorities");
}

/// Subtract the average priority from every priority.
pub fn center_priorities<Ctx>(validators: &mut [Validator<Ctx>])
where
    Ctx: Context,
{
    let average = average_priority(validators);

    for validator in validators.iter_mut() {
        validator.proposer_priority = saturating_sub(validator.proposer_priority, average);
    }
}

/// Average of the priorities, rounded toward negative infinity.
///
/// Returns 0 if there are no validators.
pub fn average_priority<Ctx>(validators: &[Validator<Ctx>]) -> i64
where
    Ctx: Context,
{
    if validators.is_empty() {
        return 0;
    }

    let sum: i128 = validators
        .iter()
        .map(|v| i128::from(v.proposer_priority))
        .sum();

    // The average of `i64` values is an `i64`
    sum.div_euclid(validators.len() as i128) as i64
}

/// Difference between the highest and the lowest priority.
pub fn max_min_priority_diff<Ctx>(validators: &[Validator<Ctx>]) -> u64
where
    Ctx: Context,
{
    let priorities = validators.iter().map(|v| v.proposer_priority);

    match (priorities.clone().max(), priorities.min()) {
        (Some(max), Some(min)) => max.abs_diff(min),
        _ => 0,
    }
}
