use crate::{Address, PublicKey};

/// This trait allows to abstract over the identity types
/// that the proposer election carries around.
///
/// Neither the address nor the public key are ever interpreted:
/// the address is only compared and the public key is only carried.
pub trait Context
where
    Self: Sized + Clone + Send + Sync + 'static,
{
    /// The type of address of a validator.
    type Address: Address;

    /// The type of public key of a validator.
    type PublicKey: PublicKey;
}
