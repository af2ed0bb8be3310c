use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Emails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Emails::EmailHash)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Emails::Email).string().not_null())
                    .col(ColumnDef::new(Emails::Orcid).string().not_null())
                    .col(
                        ColumnDef::new(Emails::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Emails::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Emails::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Emails::Visibility).string().not_null())
                    .col(ColumnDef::new(Emails::SourceOrcid).string().null())
                    .col(ColumnDef::new(Emails::SourceClientId).string().null())
                    .col(
                        ColumnDef::new(Emails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Emails::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emails_orcid")
                            .from(Emails::Table, Emails::Orcid)
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
                    .name("idx_emails_orcid")
                    .table(Emails::Table)
                    .col(Emails::Orcid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Emails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Emails {
    Table,
    EmailHash,
    Email,
    Orcid,
    IsPrimary,
    IsCurrent,
    IsVerified,
    Visibility,
    SourceOrcid,
    SourceClientId,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Orcid,
}
