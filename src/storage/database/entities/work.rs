use crate::core::models::{ExternalIds, TranslatedTitle, Visibility, Work, WorkTitle, WorkType};
use crate::core::source::SourceIdentity;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Work database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "works")]
pub struct Model {
    /// Put-code
    #[sea_orm(primary_key)]
    pub put_code: i64,

    /// Owner ORCID iD
    pub orcid: String,

    pub title: String,
    pub subtitle: Option<String>,
    pub translated_title: Option<String>,
    pub translated_title_language: Option<String>,

    /// Work type in its wire form
    pub work_type: String,

    /// External identifiers as JSON
    #[sea_orm(column_type = "Text")]
    pub external_ids: String,

    pub visibility: String,
    pub display_index: i64,

    /// Source ORCID iD
    pub source_orcid: Option<String>,
    /// Source client id
    pub source_client_id: Option<String>,

    pub journal_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub citation: Option<String>,
    pub url: Option<String>,
    pub language_code: Option<String>,
    pub country: Option<String>,
    pub publication_date: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last modification timestamp
    pub last_modified: DateTimeWithTimeZone,
}

/// Work entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to profile relation
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::Orcid",
        to = "super::profile::Column::Orcid"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain work
    pub fn to_domain_work(&self) -> Work {
        let translated_title = self.translated_title.as_ref().map(|value| TranslatedTitle {
            value: value.clone(),
            language_code: self.translated_title_language.clone(),
        });

        Work {
            put_code: self.put_code,
            path: self.orcid.clone(),
            created_date: self.created_at.with_timezone(&Utc),
            last_modified_date: self.last_modified.with_timezone(&Utc),
            source: SourceIdentity {
                source_orcid: self.source_orcid.clone(),
                source_client_id: self.source_client_id.clone(),
            },
            title: WorkTitle {
                title: Some(self.title.clone()),
                subtitle: self.subtitle.clone(),
                translated_title,
            },
            work_type: self.work_type.parse().unwrap_or(WorkType::Other),
            external_ids: serde_json::from_str::<ExternalIds>(&self.external_ids)
                .unwrap_or_default(),
            visibility: self.visibility.parse().unwrap_or(Visibility::Private),
            display_index: self.display_index,
            journal_title: self.journal_title.clone(),
            short_description: self.short_description.clone(),
            citation: self.citation.clone(),
            url: self.url.clone(),
            language_code: self.language_code.clone(),
            country: self.country.clone(),
            publication_date: self.publication_date.clone(),
        }
    }
}
