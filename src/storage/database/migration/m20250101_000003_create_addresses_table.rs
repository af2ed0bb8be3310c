use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::PutCode)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::Orcid).string().not_null())
                    .col(ColumnDef::new(Addresses::Country).string_len(2).not_null())
                    .col(ColumnDef::new(Addresses::Visibility).string().not_null())
                    .col(
                        ColumnDef::new(Addresses::DisplayIndex)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Addresses::SourceOrcid).string().null())
                    .col(ColumnDef::new(Addresses::SourceClientId).string().null())
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Addresses::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_orcid")
                            .from(Addresses::Table, Addresses::Orcid)
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
                    .name("idx_addresses_orcid")
                    .table(Addresses::Table)
                    .col(Addresses::Orcid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    PutCode,
    Orcid,
    Country,
    Visibility,
    DisplayIndex,
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
