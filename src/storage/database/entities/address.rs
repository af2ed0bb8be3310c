use crate::core::models::{Address, Visibility};
use crate::core::source::SourceIdentity;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Address database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    /// Put-code
    #[sea_orm(primary_key)]
    pub put_code: i64,

    /// Owner ORCID iD
    pub orcid: String,

    /// ISO 3166 alpha-2 country code
    pub country: String,

    pub visibility: String,
    pub display_index: i64,

    pub source_orcid: Option<String>,
    pub source_client_id: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub last_modified: DateTimeWithTimeZone,
}

/// Address entity relations
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
    /// Convert SeaORM model to domain address
    pub fn to_domain_address(&self) -> Address {
        Address {
            put_code: self.put_code,
            path: self.orcid.clone(),
            country: self.country.clone(),
            visibility: self.visibility.parse().unwrap_or(Visibility::Private),
            display_index: self.display_index,
            source: SourceIdentity {
                source_orcid: self.source_orcid.clone(),
                source_client_id: self.source_client_id.clone(),
            },
            created_date: self.created_at.with_timezone(&Utc),
            last_modified_date: self.last_modified.with_timezone(&Utc),
        }
    }
}
