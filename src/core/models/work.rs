//! Work records

use super::visibility::Visibility;
use crate::core::source::SourceIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized work types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WorkType {
    Book,
    BookChapter,
    BookReview,
    ConferenceAbstract,
    ConferencePaper,
    ConferencePoster,
    DataSet,
    DictionaryEntry,
    DissertationThesis,
    EditedBook,
    EncyclopediaEntry,
    JournalArticle,
    JournalIssue,
    LectureSpeech,
    MagazineArticle,
    Manual,
    NewspaperArticle,
    OnlineResource,
    Other,
    Patent,
    Preprint,
    Report,
    ResearchTool,
    Software,
    SupervisedStudentPublication,
    Test,
    Translation,
    Website,
    WorkingPaper,
}

impl WorkType {
    pub const ALL: [WorkType; 29] = [
        Self::Book,
        Self::BookChapter,
        Self::BookReview,
        Self::ConferenceAbstract,
        Self::ConferencePaper,
        Self::ConferencePoster,
        Self::DataSet,
        Self::DictionaryEntry,
        Self::DissertationThesis,
        Self::EditedBook,
        Self::EncyclopediaEntry,
        Self::JournalArticle,
        Self::JournalIssue,
        Self::LectureSpeech,
        Self::MagazineArticle,
        Self::Manual,
        Self::NewspaperArticle,
        Self::OnlineResource,
        Self::Other,
        Self::Patent,
        Self::Preprint,
        Self::Report,
        Self::ResearchTool,
        Self::Software,
        Self::SupervisedStudentPublication,
        Self::Test,
        Self::Translation,
        Self::Website,
        Self::WorkingPaper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::BookChapter => "book-chapter",
            Self::BookReview => "book-review",
            Self::ConferenceAbstract => "conference-abstract",
            Self::ConferencePaper => "conference-paper",
            Self::ConferencePoster => "conference-poster",
            Self::DataSet => "data-set",
            Self::DictionaryEntry => "dictionary-entry",
            Self::DissertationThesis => "dissertation-thesis",
            Self::EditedBook => "edited-book",
            Self::EncyclopediaEntry => "encyclopedia-entry",
            Self::JournalArticle => "journal-article",
            Self::JournalIssue => "journal-issue",
            Self::LectureSpeech => "lecture-speech",
            Self::MagazineArticle => "magazine-article",
            Self::Manual => "manual",
            Self::NewspaperArticle => "newspaper-article",
            Self::OnlineResource => "online-resource",
            Self::Other => "other",
            Self::Patent => "patent",
            Self::Preprint => "preprint",
            Self::Report => "report",
            Self::ResearchTool => "research-tool",
            Self::Software => "software",
            Self::SupervisedStudentPublication => "supervised-student-publication",
            Self::Test => "test",
            Self::Translation => "translation",
            Self::Website => "website",
            Self::WorkingPaper => "working-paper",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|work_type| work_type.as_str() == normalized)
            .ok_or_else(|| format!("Unknown work type: {}", s))
    }
}

impl From<WorkType> for String {
    fn from(work_type: WorkType) -> Self {
        work_type.as_str().to_string()
    }
}

impl TryFrom<String> for WorkType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Role of an external identifier relative to the work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Relationship {
    /// Identifies the work itself
    SelfRef,
    PartOf,
    VersionOf,
    FundedBy,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfRef => "self",
            Self::PartOf => "part-of",
            Self::VersionOf => "version-of",
            Self::FundedBy => "funded-by",
        }
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "self" => Ok(Self::SelfRef),
            "part-of" => Ok(Self::PartOf),
            "version-of" => Ok(Self::VersionOf),
            "funded-by" => Ok(Self::FundedBy),
            other => Err(format!("Unknown relationship: {}", other)),
        }
    }
}

impl From<Relationship> for String {
    fn from(relationship: Relationship) -> Self {
        relationship.as_str().to_string()
    }
}

impl TryFrom<String> for Relationship {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One external identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalId {
    #[serde(rename = "external-id-type", default)]
    pub id_type: String,
    #[serde(rename = "external-id-value", default)]
    pub value: String,
    #[serde(
        rename = "external-id-url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        rename = "external-id-relationship",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub relationship: Option<Relationship>,
}

impl ExternalId {
    pub fn new_self<T: Into<String>, V: Into<String>>(id_type: T, value: V) -> Self {
        Self {
            id_type: id_type.into(),
            value: value.into(),
            url: None,
            relationship: Some(Relationship::SelfRef),
        }
    }

    pub fn is_self(&self) -> bool {
        self.relationship == Some(Relationship::SelfRef)
    }

    /// Comparison key: type is case-insensitive, value is trimmed
    pub fn key(&self) -> ExternalIdKey {
        ExternalIdKey {
            id_type: self.id_type.trim().to_ascii_lowercase(),
            value: self.value.trim().to_string(),
        }
    }
}

/// Normalized identity of an external identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalIdKey {
    pub id_type: String,
    pub value: String,
}

impl fmt::Display for ExternalIdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id_type, self.value)
    }
}

/// Ordered external identifier list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "external-id", default)]
    pub items: Vec<ExternalId>,
}

impl ExternalIds {
    pub fn new(items: Vec<ExternalId>) -> Self {
        Self { items }
    }

    /// SELF identifiers only
    pub fn self_ids(&self) -> impl Iterator<Item = &ExternalId> {
        self.items.iter().filter(|id| id.is_self())
    }

    /// Key of the single SELF identifier, if there is exactly one
    pub fn self_key(&self) -> Option<ExternalIdKey> {
        let mut self_ids = self.self_ids();
        match (self_ids.next(), self_ids.next()) {
            (Some(id), None) => Some(id.key()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TranslatedTitle {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkTitle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<TranslatedTitle>,
}

impl WorkTitle {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// A work as submitted by a caller, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkCandidate {
    /// Present on updates only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<WorkTitle>,
    /// Kept as text so unknown values reach validation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

impl WorkCandidate {
    /// Minimal candidate with a title, a type and one SELF identifier
    pub fn new<S: Into<String>>(title: S, work_type: WorkType, self_id: ExternalId) -> Self {
        Self {
            title: Some(WorkTitle::new(title)),
            work_type: Some(work_type.as_str().to_string()),
            external_ids: ExternalIds::new(vec![self_id]),
            ..Default::default()
        }
    }

    pub fn self_key(&self) -> Option<ExternalIdKey> {
        self.external_ids.self_key()
    }
}

/// A persisted work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Work {
    pub put_code: i64,
    /// Owner ORCID iD
    pub path: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub source: SourceIdentity,
    pub title: WorkTitle,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub external_ids: ExternalIds,
    pub visibility: Visibility,
    pub display_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

impl Work {
    pub fn self_key(&self) -> Option<ExternalIdKey> {
        self.external_ids.self_key()
    }

    /// Copy caller-editable fields from a validated candidate.
    ///
    /// Source, put-code, display index, visibility and created date are
    /// never taken from the caller.
    pub fn merge_from(&mut self, work_type: WorkType, candidate: WorkCandidate) {
        self.title = candidate.title.unwrap_or_default();
        self.work_type = work_type;
        self.external_ids = candidate.external_ids;
        self.journal_title = candidate.journal_title;
        self.short_description = candidate.short_description;
        self.citation = candidate.citation;
        self.url = candidate.url;
        self.language_code = candidate.language_code;
        self.country = candidate.country;
        self.publication_date = candidate.publication_date;
        self.last_modified_date = Utc::now();
    }
}

/// A validated work ready to be inserted; put-code and display index are
/// assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWork {
    pub title: WorkTitle,
    pub work_type: WorkType,
    pub external_ids: ExternalIds,
    pub visibility: Visibility,
    pub source: SourceIdentity,
    pub journal_title: Option<String>,
    pub short_description: Option<String>,
    pub citation: Option<String>,
    pub url: Option<String>,
    pub language_code: Option<String>,
    pub country: Option<String>,
    pub publication_date: Option<String>,
}

impl NewWork {
    pub fn from_candidate(
        candidate: WorkCandidate,
        work_type: WorkType,
        visibility: Visibility,
        source: SourceIdentity,
    ) -> Self {
        Self {
            title: candidate.title.unwrap_or_default(),
            work_type,
            external_ids: candidate.external_ids,
            visibility,
            source,
            journal_title: candidate.journal_title,
            short_description: candidate.short_description,
            citation: candidate.citation,
            url: candidate.url,
            language_code: candidate.language_code,
            country: candidate.country,
            publication_date: candidate.publication_date,
        }
    }
}
