// crates/plat-core/src/crypto.rs

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::PlatError;
use crate::identity::AccountId;

/// An ed25519 keypair backing a registry account.
///
/// The public key doubles as the account id; the secret key stays in a local
/// key file and never crosses the wire.
pub struct Keypair {
    pub signing_key: SigningKey,
    pub verifying_key: VerifyingKey,
}

impl Keypair {
    /// Generate a new random ed25519 keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Keypair {
            signing_key,
            verifying_key,
        }
    }

    /// Rebuild a keypair from its stored 32-byte secret.
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(secret);
        let verifying_key = signing_key.verifying_key();
        Keypair {
            signing_key,
            verifying_key,
        }
    }

    /// Rebuild a keypair from the hex encoding of its secret, the format
    /// used by key files on disk.
    ///
    /// # Errors
    ///
    /// Returns `PlatError::InvalidAccount` if the input is not valid hex or
    /// does not decode to exactly 32 bytes.
    pub fn from_hex(secret_hex: &str) -> Result<Self, PlatError> {
        let bytes = hex::decode(secret_hex.trim())
            .map_err(|e| PlatError::InvalidAccount(format!("invalid key hex: {}", e)))?;
        let secret: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PlatError::InvalidAccount("secret key must be 32 bytes".to_string()))?;
        Ok(Self::from_secret_bytes(&secret))
    }

    /// Hex encoding of the secret key, for writing key files.
    pub fn to_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// Get the public key bytes (32 bytes).
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// The account id this keypair controls (its public key bytes).
    pub fn account_id(&self) -> AccountId {
        AccountId::from_bytes(self.public_key_bytes())
    }
}

/// Compute SHA-256 hash of the given bytes.
///
/// Returns a 32-byte hash.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Derive a well-known account id from a stable label.
///
/// Used for service accounts that are not controlled by a keypair, such as
/// the registry's treasury account on the settlement bank.
pub fn derive_account(label: &str) -> AccountId {
    AccountId::from_bytes(hash_bytes(label.as_bytes()))
}
