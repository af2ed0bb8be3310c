//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod builder;
pub mod extractors;
pub mod negotiation;
pub mod routes;
pub mod server;
pub mod state;
