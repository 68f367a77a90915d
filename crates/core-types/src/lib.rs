//! Common data types and abstractions for proposer election.

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

mod context;
mod height;
mod round;
mod validator;

pub use context::Context;
pub use height::Height;
pub use round::Round;
pub use validator::{Address, ProposerPriority, PublicKey, ValidatorMetadata, VotingPower};
