use rand::rngs::StdRng;
use rand::SeedableRng;

use polybft_core_types::{ValidatorMetadata, VotingPower};

use crate::{Address, PublicKey, TestContext};

/// Generate validators with the given voting powers and ed25519 keys drawn from a seeded RNG.
///
/// Addresses are derived from the hash of the public keys.
pub fn make_validators_seeded<const N: usize>(
    voting_powers: [VotingPower; N],
    seed: u64,
) -> [ValidatorMetadata<TestContext>; N] {
    make_validators_vec(voting_powers, seed)
        .try_into()
        .expect("N validators")
}

pub fn make_validators<const N: usize>(
    voting_powers: [VotingPower; N],
) -> [ValidatorMetadata<TestContext>; N] {
    make_validators_seeded(voting_powers, 42)
}

/// Same as [`make_validators_seeded`], for a number of validators only known at runtime.
pub fn make_validators_vec(
    voting_powers: impl IntoIterator<Item = VotingPower>,
    seed: u64,
) -> Vec<ValidatorMetadata<TestContext>> {
    let mut rng = StdRng::seed_from_u64(seed);

    voting_powers
        .into_iter()
        .map(|vp| {
            let public_key = PublicKey::from(
                ed25519_consensus::SigningKey::new(&mut rng).verification_key(),
            );
            ValidatorMetadata::new(Address::from_public_key(&public_key), public_key, vp)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = make_validators([1, 2, 3]);
        let b = make_validators([1, 2, 3]);
        let c = make_validators_seeded([1, 2, 3], 7);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a[0].address, Address::from_public_key(&a[0].public_key));
        assert_eq!(a.map(|v| v.voting_power), [1, 2, 3]);
    }
}
