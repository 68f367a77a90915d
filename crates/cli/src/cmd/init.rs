//! Init command

use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use polybft_config::{Config, LoggingConfig};
use polybft_core_proposer::{Height, ValidatorMetadata};
use polybft_test::{Address, Genesis, PublicKey, TestContext};

use crate::error::Error;
use crate::file::{save_config, save_genesis};

const MIN_VOTING_POWER: u64 = 1;
const MAX_VOTING_POWER: u64 = 100;

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitCmd {
    /// Overwrite existing configuration files
    #[clap(long)]
    pub overwrite: bool,

    /// Number of validators in the genesis
    #[clap(short, long, default_value = "4")]
    pub validators: usize,

    /// Height of the first block
    #[clap(long, default_value = "1")]
    pub initial_height: u64,

    /// Generate deterministic keys and voting powers for reproducibility
    #[clap(short, long)]
    pub deterministic: bool,
}

impl Default for InitCmd {
    fn default() -> Self {
        Self {
            overwrite: false,
            validators: 4,
            initial_height: 1,
            deterministic: false,
        }
    }
}

impl InitCmd {
    /// Execute the init command
    pub fn run(
        &self,
        config_file: &Path,
        genesis_file: &Path,
        logging: LoggingConfig,
    ) -> Result<(), Error> {
        let config = Config {
            logging,
            ..Config::new()
        };

        // Save configuration
        if config_file.exists() && !self.overwrite {
            warn!(file = ?config_file.display(), "Configuration file already exists, skipping");
        } else {
            info!(file = ?config_file, "Saving configuration");
            save_config(config_file, &config)?;
        }

        // Save genesis
        if genesis_file.exists() && !self.overwrite {
            warn!(file = ?genesis_file.display(), "Genesis file already exists, skipping");
        } else {
            let genesis = Genesis {
                initial_height: Height::new(self.initial_height),
                validators: generate_validators(self.validators, self.deterministic),
            };

            info!(file = ?genesis_file, validators = self.validators, "Saving genesis");
            save_genesis(genesis_file, &genesis)?;
        }

        Ok(())
    }
}

/// Generate validators with fresh ed25519 keys and random voting powers.
/// Keys and voting powers can be random or deterministically pseudo-random.
pub fn generate_validators(
    count: usize,
    deterministic: bool,
) -> Vec<ValidatorMetadata<TestContext>> {
    let mut rng = if deterministic {
        StdRng::seed_from_u64(0x42)
    } else {
        StdRng::from_entropy()
    };

    (0..count)
        .map(|_| {
            let signing_key = ed25519_consensus::SigningKey::new(&mut rng);
            let public_key = PublicKey::from(signing_key.verification_key());
            let voting_power = rng.gen_range(MIN_VOTING_POWER..=MAX_VOTING_POWER);

            ValidatorMetadata::new(Address::from_public_key(&public_key), public_key, voting_power)
        })
        .collect()
}
