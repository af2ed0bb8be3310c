//! Work validation

use crate::core::models::{WorkCandidate, WorkType};
use crate::utils::error::OrcidError;

/// Check a candidate work, returning its parsed type.
///
/// Checks run in a fixed order and stop at the first failure: type, title,
/// translated title, external identifiers.
pub fn validate_work(candidate: &WorkCandidate) -> Result<WorkType, OrcidError> {
    let work_type = validate_type(candidate.work_type.as_deref())?;
    validate_title(candidate)?;
    validate_translated_title(candidate)?;
    validate_external_ids(candidate)?;
    Ok(work_type)
}

fn validate_type(work_type: Option<&str>) -> Result<WorkType, OrcidError> {
    match work_type.map(str::trim).filter(|value| !value.is_empty()) {
        None => Err(OrcidError::invalid_work_type(None)),
        Some(value) => value
            .parse()
            .map_err(|_| OrcidError::invalid_work_type(Some(value))),
    }
}

fn validate_title(candidate: &WorkCandidate) -> Result<(), OrcidError> {
    let has_title = candidate
        .title
        .as_ref()
        .and_then(|title| title.title.as_deref())
        .is_some_and(|title| !title.trim().is_empty());

    if has_title {
        Ok(())
    } else {
        Err(OrcidError::invalid_title())
    }
}

fn validate_translated_title(candidate: &WorkCandidate) -> Result<(), OrcidError> {
    let Some(translated) = candidate
        .title
        .as_ref()
        .and_then(|title| title.translated_title.as_ref())
    else {
        return Ok(());
    };

    match translated.language_code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => Ok(()),
        _ => Err(OrcidError::invalid_translated_title()),
    }
}

fn validate_external_ids(candidate: &WorkCandidate) -> Result<(), OrcidError> {
    let self_count = candidate.external_ids.self_ids().count();
    if self_count != 1 {
        return Err(OrcidError::invalid_external_ids(format!(
            "exactly one external identifier with relationship 'self' is required, found {}",
            self_count
        )));
    }

    for id in &candidate.external_ids.items {
        if id.id_type.trim().is_empty() {
            return Err(OrcidError::invalid_external_ids(
                "external identifier type cannot be empty",
            ));
        }
        if id.value.trim().is_empty() {
            return Err(OrcidError::invalid_external_ids(format!(
                "external identifier value cannot be empty for type '{}'",
                id.id_type
            )));
        }
        if let Some(url) = id.url.as_deref().filter(|url| !url.trim().is_empty()) {
            url::Url::parse(url.trim()).map_err(|e| {
                OrcidError::invalid_external_ids(format!("invalid url '{}': {}", url, e))
            })?;
        }
    }

    Ok(())
}
