//! Update command

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use polybft_core_proposer::{
    Height, ProposerCalculator, ProposerCalculatorSnapshot, Round, ValidatorMetadata,
};
use polybft_test::{Address, Genesis, TestContext};

use crate::args::load_json_file;
use crate::cmd::schedule::Slot;

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct UpdateCmd {
    /// JSON file holding the validator set committed in the genesis block
    #[clap(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Number of rounds to compute at the next height
    #[clap(long, default_value = "1")]
    pub rounds: u32,
}

/// The state of the proposer election after the validator set change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub height: Height,
    pub total_voting_power: i64,
    /// Address, voting power and proposer priority of every validator
    pub validators: Vec<(Address, u64, i64)>,
    pub proposers: Vec<Slot>,
}

impl UpdateCmd {
    /// Execute the update command
    pub fn run(&self, genesis: Genesis) -> Result<()> {
        let validators: Vec<ValidatorMetadata<TestContext>> = load_json_file(&self.file)?;

        info!(
            file = ?self.file.display(),
            validators = validators.len(),
            "Loaded new validator set"
        );

        let report = update(genesis, &validators, self.rounds)?;

        println!(
            "height {}, total voting power {}",
            report.height, report.total_voting_power
        );

        for (address, voting_power, priority) in &report.validators {
            println!("{address}\t{voting_power}\t{priority}");
        }

        for slot in &report.proposers {
            println!("{}\t{}\t{}", slot.height, slot.round, slot.proposer);
        }

        Ok(())
    }
}

/// Commit the genesis block at round 0 with the given validator set change,
/// then compute the proposers of the first `rounds` rounds of the next height.
pub fn update(
    genesis: Genesis,
    validators: &[ValidatorMetadata<TestContext>],
    rounds: u32,
) -> Result<Report> {
    let height = genesis.initial_height;
    let snapshot = ProposerCalculatorSnapshot::new(height, genesis.validators);
    let mut calculator = ProposerCalculator::<TestContext>::new(snapshot)?;

    calculator.update_to_block(height, Round::ZERO, Some(validators))?;

    let validators = calculator
        .validators()
        .iter()
        .map(|v| (*v.address(), v.voting_power(), v.proposer_priority))
        .collect();

    let total_voting_power = calculator.total_voting_power();
    let height = calculator.height();

    let mut proposers = Vec::new();
    for round in 0..rounds {
        let round = Round::new(round);
        let proposer = calculator.calc_proposer(round, height)?;

        proposers.push(Slot {
            height,
            round,
            proposer,
        });
    }

    Ok(Report {
        height,
        total_voting_power,
        validators,
        proposers,
    })
}
