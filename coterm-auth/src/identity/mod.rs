//! Cryptographic identity types for the coterm host.
//!
//! This module provides the host's signing identity:
//!
//! - [`Signer`] - OpenSSH private key capable of producing signatures
//! - [`PublicKey`] - the corresponding verification key
//! - [`Fingerprint`] - SSH-compatible fingerprint format: `SHA256:{base64_no_padding}`
//! - [`provision_signers`] - one signer per supplied key blob, or a fresh
//!   Ed25519 signer when no key material is supplied
//!
//! # Security Properties
//!
//! - Private key material is zeroized on drop (via the `ssh-key` crate)
//! - No `Debug` implementation for `Signer` prevents accidental logging
//! - Fingerprint comparison uses constant-time equality
//!
//! # Example
//!
//! ```
//! use coterm_auth::identity::{provision_signers, Fingerprint};
//!
//! // No key material supplied: a fresh Ed25519 signer is generated.
//! let signers = provision_signers::<Vec<u8>>(&[]).unwrap();
//! assert_eq!(signers.len(), 1);
//!
//! let fingerprint = Fingerprint::from_public_key(&signers[0].public_key());
//! assert!(fingerprint.as_str().starts_with("SHA256:"));
//! ```

mod fingerprint;
mod signer;

pub use fingerprint::{Fingerprint, InvalidFingerprint};
pub use signer::{provision_signers, ProvisionError, PublicKey, SignError, Signer};
