//! Structural validation of submitted records
//!
//! Validators return the first failure as a client-facing [`OrcidError`];
//! they never touch storage.
//!
//! [`OrcidError`]: crate::utils::error::OrcidError

mod contact;
mod work;

pub use contact::{validate_country, validate_email_address};
pub use work::validate_work;
