//! Injected secret-hashing capability.

use crate::error::SchemaResult;

/// Turns a plaintext secret into an opaque stored verifier.
///
/// The engine needs this exactly once, for the seeded admin account. It is
/// expressed as a trait so the real implementation (argon2 in the CLI)
/// stays outside the engine and tests can substitute a deterministic stub.
/// Implementations must never log or echo the plaintext.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> SchemaResult<String>;
}
