//! Identity and session provisioning library for coterm.
//!
//! This crate is intentionally IO-free:
//! - No filesystem operations
//! - No network calls
//! - No logging
//!
//! The only ambient effect is drawing entropy from the OS random number
//! generator on the key-generation and session-id-generation paths. Key
//! material arrives as byte blobs supplied by the caller; turning paths
//! into blobs is the job of `coterm-host`.
//!
//! A host process runs the three primitives once at startup:
//!
//! 1. [`identity::provision_signers`] - one [`identity::Signer`] per
//!    supplied private key, or a fresh Ed25519 signer when none is given.
//! 2. [`identity::Fingerprint`] - SSH-compatible `SHA256:{base64}` digest
//!    of a signer's public key, for display and trust comparison.
//! 3. [`session::SessionId`] - validated caller-supplied session name, or
//!    a random token when the caller supplies none.

pub mod identity;
pub mod session;

pub use identity::{
    provision_signers, Fingerprint, InvalidFingerprint, ProvisionError, PublicKey, SignError,
    Signer,
};
pub use session::{SessionId, SessionIdError};
