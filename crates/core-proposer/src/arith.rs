//! Arithmetic helpers.
//!
//! Priority bookkeeping and voting power totals follow two different policies:
//! priorities clip at the bounds of `i64`, whereas totals are checked and
//! rejected as soon as they leave the allowed range.

use polybft_core_types::{ProposerPriority, VotingPower};

/// Maximum total voting power of a validator set.
///
/// Keeps `-1.125 * (new + removed)` voting power, the priority assigned to
/// validators joining the set, within the bounds of `i64`.
pub const MAX_TOTAL_VOTING_POWER: i64 = i64::MAX / 8;

/// Add `amount` to a priority, clipping at the bounds of `i64`.
pub fn saturating_add(priority: ProposerPriority, amount: i64) -> ProposerPriority {
    priority.saturating_add(amount)
}

/// Subtract `amount` from a priority, clipping at the bounds of `i64`.
pub fn saturating_sub(priority: ProposerPriority, amount: i64) -> ProposerPriority {
    priority.saturating_sub(amount)
}

/// Sum the given voting powers.
///
/// Returns `None` as soon as the running sum exceeds [`MAX_TOTAL_VOTING_POWER`].
pub fn checked_sum<I>(voting_powers: I) -> Option<i64>
where
    I: IntoIterator<Item = VotingPower>,
{
    voting_powers.into_iter().try_fold(0_i64, |sum, vp| {
        let vp = i64::try_from(vp).ok()?;
        sum.checked_add(vp).filter(|sum| *sum <= MAX_TOTAL_VOTING_POWER)
    })
}
