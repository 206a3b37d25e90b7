//! One-shot host identity preparation.

use anyhow::{Context, Result};
use std::path::Path;

use coterm_auth::identity::{provision_signers, Signer};
use coterm_auth::session::SessionId;

use crate::keys::read_key_files;

/// The host identity a transport layer consumes: signers to authenticate
/// with, and the identifier of the session about to start.
pub struct HostIdentity {
    pub signers: Vec<Signer>,
    pub session_id: SessionId,
}

/// Run the startup sequence: read key files, provision signers, resolve
/// the session identifier.
///
/// Each signer's fingerprint is logged so operators can compare it
/// out-of-band with what peers see. Safe to call repeatedly, but wasteful;
/// hosts call it once at startup and cache the result.
pub fn prepare_identity<P: AsRef<Path>>(key_paths: &[P], session_name: &str) -> Result<HostIdentity> {
    let blobs = read_key_files(key_paths)?;

    let signers = provision_signers(&blobs).context("failed to provision host signers")?;
    for signer in &signers {
        tracing::info!(fingerprint = %signer.fingerprint(), "host signer ready");
    }

    let session_id = SessionId::resolve(session_name).context("failed to resolve session id")?;
    tracing::debug!(session = %session_id, "session id resolved");

    Ok(HostIdentity {
        signers,
        session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_generates_identity_and_session() {
        let identity = prepare_identity::<&Path>(&[], "").unwrap();

        assert_eq!(identity.signers.len(), 1);
        assert_eq!(identity.session_id.as_str().len(), 36);
    }

    #[test]
    fn key_files_become_signers_in_order() {
        let dir = tempfile::tempdir().unwrap();

        let first = Signer::generate().unwrap();
        let second = Signer::generate().unwrap();
        let first_path = dir.path().join("id_first");
        let second_path = dir.path().join("id_second");
        std::fs::write(&first_path, first.to_openssh().unwrap().as_bytes()).unwrap();
        std::fs::write(&second_path, second.to_openssh().unwrap().as_bytes()).unwrap();

        let identity = prepare_identity(&[&first_path, &second_path], "demo-session").unwrap();

        assert_eq!(identity.signers.len(), 2);
        assert_eq!(identity.signers[0].public_key(), first.public_key());
        assert_eq!(identity.signers[1].public_key(), second.public_key());
        assert_eq!(identity.session_id.as_str(), "demo-session");
    }

    #[test]
    fn malformed_key_file_aborts_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("id_bogus");
        std::fs::write(&bogus, b"not a private key").unwrap();

        assert!(prepare_identity(&[&bogus], "").is_err());
    }

    #[test]
    fn invalid_session_name_aborts_bootstrap() {
        assert!(prepare_identity::<&Path>(&[], "no good").is_err());
    }
}
