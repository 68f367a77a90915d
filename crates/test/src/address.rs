use core::fmt;
use serde::{Deserialize, Serialize};

use crate::PublicKey;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(
    #[serde(
        serialize_with = "hex::serde::serialize_upper",
        deserialize_with = "hex::serde::deserialize"
    )]
    [u8; Self::LENGTH],
);

impl Address {
    pub const LENGTH: usize = 20;

    pub const fn new(value: [u8; Self::LENGTH]) -> Self {
        Self(value)
    }

    /// The address whose first byte is `byte` and all others are zero.
    pub const fn from_byte(byte: u8) -> Self {
        let mut address = [0; Self::LENGTH];
        address[0] = byte;
        Self(address)
    }

    /// The last 20 bytes of the keccak-256 hash of the public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let hash = public_key.hash();
        let mut address = [0; Self::LENGTH];
        address.copy_from_slice(&hash[hash.len() - Self::LENGTH..]);
        Self(address)
    }

    pub fn into_inner(self) -> [u8; Self::LENGTH] {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&format_args!("{self}")).finish()
    }
}

impl polybft_core_types::Address for Address {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_bytewise() {
        assert!(Address::from_byte(1) < Address::from_byte(2));
        assert!(Address::from_byte(0xFF) > Address::new([0x0F; Address::LENGTH]));

        let mut low = [0xFF; Address::LENGTH];
        low[0] = 0;
        assert!(Address::new(low) < Address::from_byte(1));
    }

    #[test]
    fn display_and_serde() {
        let address = Address::from_byte(0xAB);
        let hex = "AB00000000000000000000000000000000000000";

        assert_eq!(address.to_string(), hex);
        assert_eq!(format!("{address:?}"), format!("Address({hex})"));
        assert_eq!(serde_json::to_string(&address).unwrap(), format!("\"{hex}\""));

        let parsed: Address = serde_json::from_str(&format!("\"{hex}\"")).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn derived_from_key_hash() {
        let public_key = PublicKey::new([7; PublicKey::LENGTH]);
        let address = Address::from_public_key(&public_key);

        assert_eq!(&address.into_inner()[..], &public_key.hash()[12..]);
        assert_ne!(address, Address::from_public_key(&PublicKey::new([8; 32])));
    }
}
