//! Reconciliation of the proposer priorities with a new validator set.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use polybft_core_types::{Context, ProposerPriority, ValidatorMetadata};

use crate::arith::{checked_sum, MAX_TOTAL_VOTING_POWER};
use crate::priority::{center_priorities, rescale_priorities, PRIORITY_WINDOW_SIZE_FACTOR};
use crate::validator_set::validate;
use crate::{Error, Validator};

/// Result of reconciling a list of validators with a new validator set.
#[derive(Debug)]
pub(crate) struct Reconciled<Ctx>
where
    Ctx: Context,
{
    pub validators: Vec<Validator<Ctx>>,
    pub total_voting_power: i64,
}

/// Build the validators for `new_set` out of the `current` ones.
///
/// - validators present in both keep their priority, whatever their new voting power
/// - validators absent from `new_set` are dropped, their voting power counts as removed
/// - validators absent from `current` start at `-1.125 * (new total + removed)`
///
/// The priorities are then rescaled against the new total voting power and centered.
/// The validators follow the order of `new_set`.
pub(crate) fn reconcile<Ctx>(
    current: &[Validator<Ctx>],
    new_set: &[ValidatorMetadata<Ctx>],
) -> Result<Reconciled<Ctx>, Error<Ctx>>
where
    Ctx: Context,
{
    let total_voting_power = validate(new_set.iter())?;

    let new_addresses = new_set
        .iter()
        .map(|v| &v.address)
        .collect::<alloc::collections::BTreeSet<_>>();

    let removed_voting_power = checked_sum(
        current
            .iter()
            .filter(|v| !new_addresses.contains(v.address()))
            .map(|v| v.voting_power()),
    )
    .ok_or(Error::Overflow {
        max: MAX_TOTAL_VOTING_POWER,
    })?;

    let initial_priority = initial_priority(total_voting_power + removed_voting_power);

    let priorities: BTreeMap<&Ctx::Address, ProposerPriority> = current
        .iter()
        .map(|v| (v.address(), v.proposer_priority))
        .collect();

    let mut validators: Vec<_> = new_set
        .iter()
        .map(|metadata| {
            let priority = priorities
                .get(&metadata.address)
                .copied()
                .unwrap_or(initial_priority);

            Validator::with_priority(metadata.clone(), priority)
        })
        .collect();

    rescale_priorities(
        &mut validators,
        PRIORITY_WINDOW_SIZE_FACTOR.saturating_mul(total_voting_power),
    );
    center_priorities(&mut validators);

    Ok(Reconciled {
        validators,
        total_voting_power,
    })
}

/// Priority of a validator joining the set: `-1.125 * updated_voting_power`.
///
/// Prevents validators from un-bonding and re-bonding to reset a negative priority.
fn initial_priority(updated_voting_power: i64) -> ProposerPriority {
    -(updated_voting_power + (updated_voting_power >> 3))
}
