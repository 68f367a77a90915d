use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::slice;

use derive_where::derive_where;

use polybft_core_types::{Context, ValidatorMetadata};

use crate::arith::{checked_sum, MAX_TOTAL_VOTING_POWER};
use crate::priority::center_priorities;
use crate::{Error, Validator};

/// An ordered set of validators with distinct addresses.
///
/// Validators are kept in the order they were given in.
/// Their proposer priorities are centered around zero on construction.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorSet<Ctx>
where
    Ctx: Context,
{
    validators: Vec<Validator<Ctx>>,
    total_voting_power: i64,
}

impl<Ctx> ValidatorSet<Ctx>
where
    Ctx: Context,
{
    /// Create a new validator set from the given entries,
    /// with every proposer priority set to zero.
    ///
    /// # Errors
    /// - [`Error::EmptyValidatorSet`] if there are no entries
    /// - [`Error::DuplicateAddress`] if two entries share an address
    /// - [`Error::Overflow`] if the total voting power exceeds [`MAX_TOTAL_VOTING_POWER`]
    pub fn new(
        validators: impl IntoIterator<Item = ValidatorMetadata<Ctx>>,
    ) -> Result<Self, Error<Ctx>> {
        Self::from_validators(validators.into_iter().map(Validator::new).collect())
    }

    /// Create a new validator set from validators carrying their own priorities.
    ///
    /// The priorities are centered around zero.
    ///
    /// # Errors
    /// Same as [`ValidatorSet::new`].
    pub fn from_validators(mut validators: Vec<Validator<Ctx>>) -> Result<Self, Error<Ctx>> {
        let total_voting_power = validate(validators.iter().map(|v| &v.metadata))?;

        center_priorities(&mut validators);

        Ok(Self {
            validators,
            total_voting_power,
        })
    }

    /// The number of validators in the set.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the set is empty, which never holds for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterate over the validators in the set.
    pub fn iter(&self) -> slice::Iter<'_, Validator<Ctx>> {
        self.validators.iter()
    }

    /// The validators, in order.
    pub fn validators(&self) -> &[Validator<Ctx>] {
        &self.validators
    }

    /// The total voting power of the validator set.
    pub fn total_voting_power(&self) -> i64 {
        self.total_voting_power
    }

    /// The identities and voting powers of the validators, in order.
    pub fn accounts(&self) -> Vec<ValidatorMetadata<Ctx>> {
        self.validators.iter().map(|v| v.metadata.clone()).collect()
    }

    /// Get a validator by its index.
    pub fn get_by_index(&self, index: usize) -> Option<&Validator<Ctx>> {
        self.validators.get(index)
    }

    /// Get a validator by its address.
    pub fn get_by_address(&self, address: &Ctx::Address) -> Option<&Validator<Ctx>> {
        self.validators.iter().find(|v| v.address() == address)
    }

    /// Get a validator by its public key.
    pub fn get_by_public_key(&self, public_key: &Ctx::PublicKey) -> Option<&Validator<Ctx>> {
        self.validators.iter().find(|v| v.public_key() == public_key)
    }

    /// Consume the set, returning its validators.
    pub fn into_validators(self) -> Vec<Validator<Ctx>> {
        self.validators
    }
}

impl<'a, Ctx> IntoIterator for &'a ValidatorSet<Ctx>
where
    Ctx: Context,
{
    type Item = &'a Validator<Ctx>;
    type IntoIter = slice::Iter<'a, Validator<Ctx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check that the entries form a valid validator set,
/// returning their total voting power.
pub(crate) fn validate<'a, Ctx>(
    entries: impl Iterator<Item = &'a ValidatorMetadata<Ctx>> + Clone,
) -> Result<i64, Error<Ctx>>
where
    Ctx: Context,
{
    let mut seen = BTreeSet::new();
    for entry in entries.clone() {
        if !seen.insert(&entry.address) {
            return Err(Error::DuplicateAddress(entry.address.clone()));
        }
    }

    if seen.is_empty() {
        return Err(Error::EmptyValidatorSet);
    }

    checked_sum(entries.map(|entry| entry.voting_power)).ok_or(Error::Overflow {
        max: MAX_TOTAL_VOTING_POWER,
    })
}
