use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::core::config::HashingConfig;
use crate::features::signup::error::HashingError;
use crate::features::signup::ports::CredentialHasher;

/// Argon2id credential hasher producing PHC strings with a fresh salt per call
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new(config: &HashingConfig) -> Result<Self, String> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| format!("Invalid Argon2 parameters: {}", e))?;

        Ok(Self { params })
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        let params = self.params.clone();
        let plaintext = plaintext.to_owned();

        // Argon2 is deliberately expensive, keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashingError(e.to_string()))
        })
        .await
        .map_err(|e| HashingError(format!("Hashing task failed: {}", e)))?
    }
}
