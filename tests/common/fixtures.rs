//! Test fixtures and data factories

use orcid_registry::core::models::{ExternalId, WorkCandidate, WorkTitle, WorkType};
use orcid_registry::core::source::{Caller, SourceIdentity};

/// Profile most tests own
pub const ORCID: &str = "0000-0002-1825-0097";
/// A second profile
pub const OTHER_ORCID: &str = "0000-0001-5109-3700";

/// Member API client ids
pub const CLIENT: &str = "APP-0000000000000001";
pub const OTHER_CLIENT: &str = "APP-0000000000000002";

/// Factory for callers
pub struct CallerFactory;

impl CallerFactory {
    /// The default member API client
    pub fn client() -> Caller {
        Caller::api(SourceIdentity::client(CLIENT))
    }

    /// A different member API client
    pub fn other_client() -> Caller {
        Caller::api(SourceIdentity::client(OTHER_CLIENT))
    }

    /// The profile owner acting through the UI
    pub fn owner_ui() -> Caller {
        Caller::ui(SourceIdentity::orcid(ORCID))
    }
}

/// Factory for work candidates
pub struct WorkFactory;

impl WorkFactory {
    /// Valid journal article with DOI `10.1000/<n>`
    pub fn numbered(n: usize) -> WorkCandidate {
        WorkCandidate::new(
            format!("Work {}", n),
            WorkType::JournalArticle,
            ExternalId::new_self("doi", format!("10.1000/{}", n)),
        )
    }

    /// `count` valid works with distinct identifiers
    pub fn batch(count: usize) -> Vec<WorkCandidate> {
        (0..count).map(Self::numbered).collect()
    }

    /// Same work with a different title
    pub fn retitled(candidate: &WorkCandidate, title: &str) -> WorkCandidate {
        WorkCandidate {
            title: Some(WorkTitle::new(title)),
            ..candidate.clone()
        }
    }
}
