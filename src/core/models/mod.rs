//! Registry domain models

pub mod address;
pub mod email;
pub mod profile;
pub mod visibility;
pub mod work;

pub use address::{Address, AddressCandidate};
pub use email::{Email, EmailCandidate};
pub use profile::Profile;
pub use visibility::Visibility;
pub use work::{
    ExternalId, ExternalIdKey, ExternalIds, NewWork, Relationship, TranslatedTitle, Work,
    WorkCandidate, WorkTitle, WorkType,
};
