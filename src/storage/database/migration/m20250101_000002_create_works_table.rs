use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Works::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Works::PutCode)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Works::Orcid).string().not_null())
                    .col(ColumnDef::new(Works::Title).string().not_null())
                    .col(ColumnDef::new(Works::Subtitle).string().null())
                    .col(ColumnDef::new(Works::TranslatedTitle).string().null())
                    .col(ColumnDef::new(Works::TranslatedTitleLanguage).string().null())
                    .col(ColumnDef::new(Works::WorkType).string().not_null())
                    .col(ColumnDef::new(Works::ExternalIds).text().not_null())
                    .col(ColumnDef::new(Works::Visibility).string().not_null())
                    .col(ColumnDef::new(Works::DisplayIndex).big_integer().not_null())
                    .col(ColumnDef::new(Works::SourceOrcid).string().null())
                    .col(ColumnDef::new(Works::SourceClientId).string().null())
                    .col(ColumnDef::new(Works::JournalTitle).string().null())
                    .col(ColumnDef::new(Works::ShortDescription).text().null())
                    .col(ColumnDef::new(Works::Citation).text().null())
                    .col(ColumnDef::new(Works::Url).string().null())
                    .col(ColumnDef::new(Works::LanguageCode).string().null())
                    .col(ColumnDef::new(Works::Country).string().null())
                    .col(ColumnDef::new(Works::PublicationDate).string().null())
                    .col(
                        ColumnDef::new(Works::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Works::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_works_orcid")
                            .from(Works::Table, Works::Orcid)
                            .to(Profiles::Table, Profiles::Orcid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_works_orcid")
                    .table(Works::Table)
                    .col(Works::Orcid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Works {
    Table,
    PutCode,
    Orcid,
    Title,
    Subtitle,
    TranslatedTitle,
    TranslatedTitleLanguage,
    WorkType,
    ExternalIds,
    Visibility,
    DisplayIndex,
    SourceOrcid,
    SourceClientId,
    JournalTitle,
    ShortDescription,
    Citation,
    Url,
    LanguageCode,
    Country,
    PublicationDate,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Orcid,
}
