//! Schedule command

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use polybft_config::ScheduleConfig;
use polybft_core_proposer::{Height, ProposerCalculator, ProposerCalculatorSnapshot, Round};
use polybft_test::{Address, Genesis, TestContext};

#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct ScheduleCmd {
    /// Number of heights to go through, starting at the genesis height
    #[clap(long)]
    pub heights: Option<u64>,

    /// Number of rounds to compute at each height
    #[clap(long)]
    pub rounds: Option<u32>,
}

/// The proposer of a round at a given height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub height: Height,
    pub round: Round,
    pub proposer: Address,
}

impl ScheduleCmd {
    /// Execute the schedule command
    pub fn run(&self, genesis: Genesis, defaults: ScheduleConfig) -> Result<()> {
        let heights = self.heights.unwrap_or(defaults.heights);
        let rounds = self.rounds.unwrap_or(defaults.rounds);

        info!(
            initial_height = %genesis.initial_height,
            validators = genesis.validators.len(),
            %heights,
            %rounds,
            "Computing proposer schedule"
        );

        for slot in schedule(genesis, heights, rounds)? {
            println!("{}\t{}\t{}", slot.height, slot.round, slot.proposer);
        }

        Ok(())
    }
}

/// Compute the proposers of the first `rounds` rounds of `heights` heights,
/// every block being committed at round 0.
pub fn schedule(genesis: Genesis, heights: u64, rounds: u32) -> Result<Vec<Slot>> {
    let initial_height = genesis.initial_height;
    let snapshot = ProposerCalculatorSnapshot::new(initial_height, genesis.validators);
    let mut calculator = ProposerCalculator::<TestContext>::new(snapshot)?;

    let mut slots = Vec::new();

    for offset in 0..heights {
        let height = initial_height.increment_by(offset);

        for round in 0..rounds {
            let round = Round::new(round);
            let proposer = calculator.calc_proposer(round, height)?;

            slots.push(Slot {
                height,
                round,
                proposer,
            });
        }

        calculator.update_to_block(height, Round::ZERO, None)?;
    }

    Ok(slots)
}
