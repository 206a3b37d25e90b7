//! Public key fingerprints.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::identity::PublicKey;

/// The fingerprint string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fingerprint format")]
pub struct InvalidFingerprint;

/// A SHA-256 fingerprint of a public key.
///
/// Format: `SHA256:{base64_no_padding}`, byte-for-byte the string OpenSSH
/// tooling prints for the same key. The digest is computed over the key's
/// canonical SSH wire encoding and encoded with the standard base64
/// alphabet (`+`/`/`), trailing `=` padding stripped.
///
/// # Security
///
/// Comparisons use constant-time equality. The Hash derive is kept despite
/// the manual PartialEq: the fingerprint is public information, only
/// equality checks need timing-attack protection.
#[derive(Clone, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::derived_hash_with_manual_eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The prefix used for fingerprint strings.
    pub const PREFIX: &'static str = "SHA256:";

    /// Derive the fingerprint of a public key.
    ///
    /// Deterministic: identical keys always yield identical fingerprints,
    /// on every platform.
    #[must_use]
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let digest = Sha256::digest(public_key.to_wire_bytes());
        Self(format!("{}{}", Self::PREFIX, STANDARD_NO_PAD.encode(digest)))
    }

    /// Parse a fingerprint from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFingerprint`] unless the string is the `SHA256:`
    /// prefix followed by the unpadded base64 encoding of a 256-bit digest.
    pub fn parse(s: &str) -> Result<Self, InvalidFingerprint> {
        let encoded = s.strip_prefix(Self::PREFIX).ok_or(InvalidFingerprint)?;

        let decoded = STANDARD_NO_PAD
            .decode(encoded)
            .map_err(|_| InvalidFingerprint)?;
        if decoded.len() != 32 {
            return Err(InvalidFingerprint);
        }

        Ok(Self(s.to_string()))
    }

    /// The raw digest bytes (without the prefix).
    ///
    /// # Panics
    ///
    /// Cannot panic for properly constructed values: both constructors
    /// guarantee the internal format.
    #[must_use]
    pub fn digest_bytes(&self) -> [u8; 32] {
        let encoded = self
            .0
            .strip_prefix(Self::PREFIX)
            .expect("fingerprint invariant violated: missing prefix");
        let decoded = STANDARD_NO_PAD
            .decode(encoded)
            .expect("fingerprint invariant violated: invalid base64");
        decoded
            .try_into()
            .expect("fingerprint invariant violated: wrong length")
    }

    /// Get the fingerprint as a string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fingerprint({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Signer;

    /// github.com's published Ed25519 host key.
    const GITHUB_HOST_KEY: &str =
        "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl";

    /// The fingerprint GitHub documents for that key.
    const GITHUB_FINGERPRINT: &str = "SHA256:+DiY3wvvV6TuJJhbpZisF/zLDA0zPMSvHdkr4UvCOqU";

    #[test]
    fn test_fingerprint_matches_openssh_output() {
        let key = PublicKey::from_openssh(GITHUB_HOST_KEY).unwrap();
        let fingerprint = Fingerprint::from_public_key(&key);
        assert_eq!(fingerprint.as_str(), GITHUB_FINGERPRINT);
    }

    #[test]
    fn test_fingerprint_format() {
        let signer = Signer::generate().unwrap();
        let fingerprint = Fingerprint::from_public_key(&signer.public_key());

        assert!(fingerprint.as_str().starts_with("SHA256:"));
        assert!(!fingerprint.as_str().contains('='));
        assert_eq!(fingerprint.digest_bytes().len(), 32);

        // Base64 of 32 bytes without padding = 43 characters,
        // plus the 7-character prefix.
        assert_eq!(fingerprint.as_str().len(), 50);
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let signer = Signer::generate().unwrap();
        let public_key = signer.public_key();

        let fp1 = Fingerprint::from_public_key(&public_key);
        let fp2 = Fingerprint::from_public_key(&public_key);

        assert_eq!(fp1, fp2);
    }

    #[test]
    fn test_distinct_keys_have_distinct_fingerprints() {
        let a = Signer::generate().unwrap();
        let b = Signer::generate().unwrap();

        assert_ne!(
            Fingerprint::from_public_key(&a.public_key()),
            Fingerprint::from_public_key(&b.public_key())
        );
    }

    #[test]
    fn test_fingerprint_parse() {
        let parsed = Fingerprint::parse(GITHUB_FINGERPRINT).unwrap();
        assert_eq!(parsed.as_str(), GITHUB_FINGERPRINT);
    }

    #[test]
    fn test_fingerprint_parse_invalid() {
        // Missing prefix
        assert!(Fingerprint::parse("abc123").is_err());

        // Invalid base64
        assert!(Fingerprint::parse("SHA256:!!!invalid!!!").is_err());

        // Valid base64 but not a 256-bit digest
        assert!(Fingerprint::parse("SHA256:YWJj").is_err());

        // Padded encodings are rejected: the canonical form strips `=`
        assert!(Fingerprint::parse(&format!("{}=", GITHUB_FINGERPRINT)).is_err());
    }

    #[test]
    fn test_fingerprint_serde_roundtrip() {
        let fingerprint = Fingerprint::parse(GITHUB_FINGERPRINT).unwrap();
        let json = serde_json::to_string(&fingerprint).unwrap();
        assert_eq!(json, format!("\"{}\"", GITHUB_FINGERPRINT));
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fingerprint);
    }
}
