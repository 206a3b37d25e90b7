//! Session identifier resolution.
//!
//! A session identifier names one hosted terminal session and is used as
//! an opaque routing token by whatever transport carries the session.
//! Callers may pick their own name, which must survive a strict format
//! check; when no name is supplied a random identifier is generated.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Length of a generated identifier, matching the textual form of a UUID.
pub const GENERATED_LEN: usize = 36;

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    // Anchored on the entire candidate: partial matches are rejected.
    NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]{3,}$").unwrap())
}

/// Errors that can occur while resolving a session identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SessionIdError {
    /// The supplied name is not 3+ characters of letters, digits,
    /// underscore, or hyphen.
    #[error("invalid session name: {name:?}")]
    InvalidName {
        /// The rejected candidate, for user-facing error reporting.
        name: String,
    },
}

/// An opaque token naming one session instance.
///
/// Either caller-chosen (validated) or randomly generated. Computed once
/// at session start; this type has no notion of the session's later
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Resolve a caller-supplied candidate into a session identifier.
    ///
    /// An empty candidate means "no preference" and yields a freshly
    /// generated identifier. A non-empty candidate is returned unchanged
    /// when it passes the format check; no trimming or case-folding is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`SessionIdError::InvalidName`] when a non-empty candidate
    /// fails the format check. This is a hard rejection, not a fallback
    /// to generation.
    pub fn resolve(candidate: &str) -> Result<Self, SessionIdError> {
        if candidate.is_empty() {
            return Ok(Self::generate());
        }

        if name_regex().is_match(candidate) {
            Ok(Self(candidate.to_owned()))
        } else {
            Err(SessionIdError::InvalidName {
                name: candidate.to_owned(),
            })
        }
    }

    /// Generate a random identifier from the OS random number generator.
    ///
    /// The result is [`GENERATED_LEN`] alphanumeric characters, an
    /// alphabet safe for use in URLs and routing tokens.
    #[must_use]
    pub fn generate() -> Self {
        let id: String = OsRng
            .sample_iter(&Alphanumeric)
            .take(GENERATED_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Get the identifier as a string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
