// crates/plat-core/src/identity.rs

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlatError;

/// Address of a participant on the registry: buyers, sellers, the owner,
/// and the registry's own treasury account.
///
/// An address is 32 bytes, normally the ed25519 public key of the account
/// holder (see [`crate::crypto::Keypair`]). Well-known service accounts are
/// instead derived from stable labels via [`crate::crypto::derive_account`].
/// Addresses travel as lowercase hex strings (64 chars) at every API
/// boundary, which is also how they serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Build an account id directly from 32 raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32 bytes of the address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding of the address (64 lowercase hex chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse an address from its hex encoding.
    ///
    /// # Errors
    ///
    /// Returns `PlatError::InvalidAccount` if the input is not valid hex or
    /// does not decode to exactly 32 bytes.
    pub fn from_hex(s: &str) -> Result<Self, PlatError> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| PlatError::InvalidAccount(format!("invalid hex: {}", e)))?;
        let raw: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PlatError::InvalidAccount("address must be 32 bytes".to_string()))?;
        Ok(Self(raw))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for AccountId {
    type Err = PlatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serialize as the hex string rather than a 32-element byte array so that
// account ids stay readable in JSON payloads and journaled events.
impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let id = AccountId::from_bytes([0xAB; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(AccountId::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn test_from_hex_trims_whitespace() {
        let id = AccountId::from_bytes([7; 32]);
        let padded = format!("  {}\n", id.to_hex());
        assert_eq!(AccountId::from_hex(&padded).unwrap(), id);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(AccountId::from_hex("not hex").is_err());
        assert!(AccountId::from_hex("abcd").is_err());
        // 31 bytes.
        assert!(AccountId::from_hex(&"00".repeat(31)).is_err());
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let id = AccountId::from_bytes([1; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
