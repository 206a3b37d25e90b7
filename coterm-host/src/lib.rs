//! Host-side plumbing for coterm.
//!
//! Everything here is the IO counterpart of the IO-free `coterm-auth`
//! crate: resolving and creating the per-user application directory,
//! opening the host log file and wiring it to `tracing`, reading private
//! key files into byte blobs, and formatting the default bind address.
//!
//! [`bootstrap::prepare_identity`] composes the pieces into the one-shot
//! identity preparation step a host runs at startup.

pub mod bootstrap;
pub mod keys;
pub mod logging;
pub mod net;
pub mod paths;

pub use bootstrap::{prepare_identity, HostIdentity};
