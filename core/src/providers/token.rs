//! Admin security tokens.

use sha2::{Digest, Sha256};

/// Produces the opaque per-controller security token.
pub trait TokenGenerator: Send + Sync {
    /// Token for `seed`, `None` when no token can be derived (empty seed).
    fn admin_token(&self, seed: &str) -> Option<String>;
}

/// SHA-256 of a secret salt followed by the seed, hex encoded.
///
/// The salt is the installation's cookie key, so tokens cannot be forged
/// without it.
///
/// # Examples
///
/// ```
/// use backoffice_core::{SaltedTokenGenerator, TokenGenerator};
///
/// let tokens = SaltedTokenGenerator::new("cookie-key");
/// let token = tokens.admin_token("AdminCartsController1020").unwrap();
/// assert_eq!(token.len(), 64);
/// assert_eq!(tokens.admin_token(""), None);
/// ```
#[derive(Clone)]
pub struct SaltedTokenGenerator {
    salt: String,
}

impl SaltedTokenGenerator {
    /// Create a token generator with the given salt.
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl std::fmt::Debug for SaltedTokenGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedTokenGenerator")
            .field("salt", &"<redacted>")
            .finish()
    }
}

impl TokenGenerator for SaltedTokenGenerator {
    fn admin_token(&self, seed: &str) -> Option<String> {
        if seed.is_empty() {
            return None;
        }

        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(seed.as_bytes());
        Some(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn test_token_is_deterministic() {
        let tokens = SaltedTokenGenerator::new("salt");
        assert_eq!(tokens.admin_token("seed"), tokens.admin_token("seed"));
    }

    #[test]
    fn test_token_depends_on_salt_and_seed() {
        let a = SaltedTokenGenerator::new("salt-a");
        let b = SaltedTokenGenerator::new("salt-b");

        assert_ne!(a.admin_token("seed"), b.admin_token("seed"));
        assert_ne!(a.admin_token("seed-1"), a.admin_token("seed-2"));
    }

    #[test]
    fn test_token_is_lowercase_hex() {
        let token = SaltedTokenGenerator::new("salt").admin_token("seed").unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_empty_seed_has_no_token() {
        assert_eq!(SaltedTokenGenerator::new("salt").admin_token(""), None);
    }

    #[test]
    fn test_debug_hides_salt() {
        let debug = format!("{:?}", SaltedTokenGenerator::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
