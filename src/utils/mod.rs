//! Utility modules for the registry
//!
//! - **error**: crate error type and the client-facing error object
//! - **logging**: subscriber setup and structured operation logging

pub mod error;
pub mod logging;
