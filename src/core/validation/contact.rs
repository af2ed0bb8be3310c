//! Address and email validation

use crate::utils::error::OrcidError;
use once_cell::sync::Lazy;
use regex::Regex;

static COUNTRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("Invalid country regex"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// ISO 3166 alpha-2, upper case
pub fn validate_country(country: &str) -> Result<(), OrcidError> {
    if COUNTRY_PATTERN.is_match(country) {
        Ok(())
    } else {
        Err(OrcidError::invalid_country(country))
    }
}

/// Syntactic check of an email address, surrounding whitespace ignored
pub fn validate_email_address(email: &str) -> Result<(), OrcidError> {
    let trimmed = email.trim();
    if trimmed.len() <= 254 && EMAIL_PATTERN.is_match(trimmed) {
        Ok(())
    } else {
        Err(OrcidError::invalid_email(email))
    }
}
