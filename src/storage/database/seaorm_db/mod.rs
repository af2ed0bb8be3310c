// Module declarations
mod address_ops;
mod connection;
mod email_ops;
mod profile_ops;
mod types;
mod work_ops;

// Re-export public types
pub use address_ops::NewAddress;
pub use types::{DatabaseBackendType, SeaOrmDatabase};
