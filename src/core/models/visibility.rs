//! Record-level privacy setting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who may see a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Visibility {
    Public,
    Limited,
    RegisteredOnly,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Limited => "limited",
            Self::RegisteredOnly => "registered-only",
            Self::Private => "private",
        }
    }

    /// Visibility a new record receives.
    ///
    /// Claimed profiles impose their default activities visibility (private
    /// when unset); unclaimed profiles keep what the caller sent, private when
    /// nothing was sent.
    pub fn for_new_record(
        claimed: bool,
        profile_default: Option<Visibility>,
        incoming: Option<Visibility>,
    ) -> Visibility {
        if claimed {
            profile_default.unwrap_or(Visibility::Private)
        } else {
            incoming.unwrap_or(Visibility::Private)
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "limited" => Ok(Self::Limited),
            "registered-only" | "registered_only" => Ok(Self::RegisteredOnly),
            "private" => Ok(Self::Private),
            other => Err(format!("Unknown visibility: {}", other)),
        }
    }
}

impl From<Visibility> for String {
    fn from(visibility: Visibility) -> Self {
        visibility.as_str().to_string()
    }
}

impl TryFrom<String> for Visibility {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
