//! Argon2id implementation of the engine's secret-hashing capability.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use qh_schema::{SchemaError, SchemaResult, SecretHasher};
use rand::RngCore;

const MEMORY_COST: u32 = 15360; // KiB
const TIME_COST: u32 = 3;
const PARALLELISM: u32 = 2;
const SALT_LENGTH: usize = 16;
const HASH_LENGTH: usize = 32;

/// Argon2id hasher used for the seeded admin account.
pub struct Argon2Hasher;

impl SecretHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> SchemaResult<String> {
        let mut salt = vec![0u8; SALT_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);

        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(HASH_LENGTH))
                .map_err(|e| SchemaError::SecretHash(e.to_string()))?,
        );

        let mut output = vec![0u8; HASH_LENGTH];
        argon2
            .hash_password_into(plaintext.as_bytes(), &salt, &mut output)
            .map_err(|e| SchemaError::SecretHash(e.to_string()))?;

        // Format: $argon2id$v=19$m=15360,t=3,p=2$<salt_base64>$<hash_base64>
        let salt_b64 = BASE64_STANDARD.encode(&salt);
        let hash_b64 = BASE64_STANDARD.encode(&output);
        Ok(format!(
            "$argon2id$v=19$m={MEMORY_COST},t={TIME_COST},p={PARALLELISM}${salt_b64}${hash_b64}"
        ))
    }
}
