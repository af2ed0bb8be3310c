use crate::core::models::{Profile, Visibility};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Owner ORCID iD
    #[sea_orm(primary_key, auto_increment = false)]
    pub orcid: String,

    /// Claimed flag
    pub claimed: bool,

    /// Default visibility for new activities
    pub default_visibility: Option<String>,

    /// Last display index handed out to a sub-record
    pub display_index_counter: i64,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last modification timestamp
    pub last_modified: DateTimeWithTimeZone,
}

/// Profile entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work::Entity")]
    Works,
    #[sea_orm(has_many = "super::address::Entity")]
    Addresses,
    #[sea_orm(has_many = "super::email::Entity")]
    Emails,
}

impl Related<super::work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Works.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::email::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Emails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain profile
    pub fn to_domain_profile(&self) -> Profile {
        Profile {
            orcid: self.orcid.clone(),
            claimed: self.claimed,
            default_visibility: self
                .default_visibility
                .as_deref()
                .and_then(|v| v.parse::<Visibility>().ok()),
            display_index_counter: self.display_index_counter,
            last_modified_date: self.last_modified.with_timezone(&Utc),
        }
    }
}
