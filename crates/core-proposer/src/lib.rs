//! Deterministic, stake-weighted round-robin proposer election.
//!
//! Every validator keeps a proposer priority. At each round, every priority
//! grows by the validator's voting power, and the validator with the highest
//! priority proposes and pays the total voting power of the set. Over many
//! rounds, each validator proposes in proportion to its share of the stake.

#![no_std]
#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

extern crate alloc;

pub mod arith;
pub mod priority;

mod calculator;
mod error;
mod snapshot;
mod update;
mod validator;
mod validator_set;

pub use arith::MAX_TOTAL_VOTING_POWER;
pub use calculator::ProposerCalculator;
pub use error::Error;
pub use priority::PRIORITY_WINDOW_SIZE_FACTOR;
pub use snapshot::ProposerCalculatorSnapshot;
pub use validator::Validator;
pub use validator_set::ValidatorSet;

pub use polybft_core_types::{
    Address, Context, Height, ProposerPriority, PublicKey, Round, ValidatorMetadata, VotingPower,
};
