use crate::core::models::{Email, Visibility};
use crate::core::source::SourceIdentity;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Email database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "emails")]
pub struct Model {
    /// SHA-256 of the normalized address
    #[sea_orm(primary_key, auto_increment = false)]
    pub email_hash: String,

    pub email: String,

    /// Owner ORCID iD
    pub orcid: String,

    pub is_primary: bool,
    pub is_current: bool,
    pub is_verified: bool,
    pub visibility: String,

    pub source_orcid: Option<String>,
    pub source_client_id: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub last_modified: DateTimeWithTimeZone,
}

/// Email entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
    /// Convert SeaORM model to domain email
    pub fn to_domain_email(&self) -> Email {
        Email {
            email: self.email.clone(),
            hash: self.email_hash.clone(),
            path: self.orcid.clone(),
            primary: self.is_primary,
            current: self.is_current,
            verified: self.is_verified,
            visibility: self.visibility.parse().unwrap_or(Visibility::Private),
            source: SourceIdentity {
                source_orcid: self.source_orcid.clone(),
                source_client_id: self.source_client_id.clone(),
            },
            created_date: self.created_at.with_timezone(&Utc),
            last_modified_date: self.last_modified.with_timezone(&Utc),
        }
    }

    /// Convert domain email to SeaORM active model
    pub fn from_domain_email(email: &Email) -> ActiveModel {
        ActiveModel {
            email_hash: Set(email.hash.clone()),
            email: Set(email.email.clone()),
            orcid: Set(email.path.clone()),
            is_primary: Set(email.primary),
            is_current: Set(email.current),
            is_verified: Set(email.verified),
            visibility: Set(email.visibility.to_string()),
            source_orcid: Set(email.source.source_orcid.clone()),
            source_client_id: Set(email.source.source_client_id.clone()),
            created_at: Set(email.created_date.into()),
            last_modified: Set(email.last_modified_date.into()),
        }
    }
}
