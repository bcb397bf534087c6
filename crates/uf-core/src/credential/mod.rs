//!
//! Salted password credentials for the single device user.
//!
//! Passwords are never stored. A [`Credential`] holds an Argon2id hash with a
//! random salt; verification recomputes the hash and compares in constant time.
//!

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;

/// Current version of the encoded credential format.
pub const CREDENTIAL_VERSION: u8 = 0x01;

/// Size of the salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Size of the hash output in bytes.
pub const HASH_SIZE: usize = 32;

/// Total size of the encoded credential (version + salt + hash).
pub const ENCODED_SIZE: usize = 1 + SALT_SIZE + HASH_SIZE;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("invalid encoded credential length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("unsupported credential version: {0}")]
    UnsupportedVersion(u8),
    #[error("invalid argon2 parameters: {0}")]
    InvalidParams(String),
    #[error("argon2id hashing failed: {0}")]
    Hashing(String),
    #[error("invalid hex encoding: {0}")]
    Hex(String),
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialParams {
    /// Memory cost in KiB.
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for CredentialParams {
    fn default() -> Self {
        Self {
            m_cost: 19 * 1024,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

impl CredentialParams {
    fn to_argon(self) -> Result<Params, CredentialError> {
        Params::new(self.m_cost, self.t_cost, self.p_cost, Some(HASH_SIZE))
            .map_err(|e| CredentialError::InvalidParams(e.to_string()))
    }
}

/// Stored password credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub version: u8,
    pub salt: [u8; SALT_SIZE],
    pub hash: [u8; HASH_SIZE],
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl Credential {
    /// Hash a password with a fresh random salt.
    pub fn derive(password: &str, params: CredentialParams) -> Result<Self, CredentialError> {
        let salt = generate_salt();
        let hash = argon2id_hash(password, &salt, params)?;
        Ok(Self {
            version: CREDENTIAL_VERSION,
            salt,
            hash,
        })
    }

    /// Check a password against this credential.
    pub fn verify(&self, password: &str, params: CredentialParams) -> Result<bool, CredentialError> {
        let computed = argon2id_hash(password, &self.salt, params)?;
        Ok(computed.ct_eq(&self.hash).into())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(ENCODED_SIZE);
        encoded.push(self.version);
        encoded.extend_from_slice(&self.salt);
        encoded.extend_from_slice(&self.hash);
        encoded
    }

    pub fn decode(encoded: &[u8]) -> Result<Self, CredentialError> {
        if encoded.len() != ENCODED_SIZE {
            return Err(CredentialError::InvalidLength {
                expected: ENCODED_SIZE,
                actual: encoded.len(),
            });
        }
        let version = encoded[0];
        if version != CREDENTIAL_VERSION {
            return Err(CredentialError::UnsupportedVersion(version));
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&encoded[1..1 + SALT_SIZE]);

        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(&encoded[1 + SALT_SIZE..]);

        Ok(Self {
            version,
            salt,
            hash,
        })
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.encode()))
    }
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text)
            .map_err(|e| serde::de::Error::custom(CredentialError::Hex(e.to_string())))?;
        Credential::decode(&bytes).map_err(serde::de::Error::custom)
    }
}

fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    salt
}

fn argon2id_hash(
    password: &str,
    salt: &[u8; SALT_SIZE],
    params: CredentialParams,
) -> Result<[u8; HASH_SIZE], CredentialError> {
    let mut output = [0u8; HASH_SIZE];
    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon()?);
    argon
        .hash_password_into(password.as_bytes(), salt, &mut output)
        .map_err(|e| CredentialError::Hashing(e.to_string()))?;
    Ok(output)
}
