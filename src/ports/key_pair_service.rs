//! Cloud key pair port definition.

use crate::domain::{AppError, KeyPair};

/// Creates and deletes cloud SSH key pairs.
pub trait KeyPairService {
    /// Create a key pair named `name` and return its private material.
    fn generate_key_pair(&self, name: &str) -> Result<KeyPair, AppError>;

    fn delete_key_pair(&self, name: &str) -> Result<(), AppError>;
}
