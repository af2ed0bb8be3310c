//! Error handling for the registry
//!
//! `RegistryError` is the crate-wide error; `OrcidError` is the structured,
//! client-facing error object with a stable numeric code.

mod helpers;
mod orcid;
mod response;
mod types;

pub use orcid::{OrcidError, OrcidErrorCode};
pub use types::{RegistryError, Result};
