use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(pk_auto(Songs::Id))
                    .col(text(Songs::GroupName))
                    .col(text(Songs::Song))
                    .col(text(Songs::ReleaseDate).default(""))
                    .col(text(Songs::Lyrics).default(""))
                    .to_owned(),
            )
            .await?;

        // Lookups by business key, not a uniqueness constraint
        manager
            .create_index(
                Index::create()
                    .name("idx_songs_group_name_song")
                    .table(Songs::Table)
                    .col(Songs::GroupName)
                    .col(Songs::Song)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Songs {
    Table,
    Id,
    GroupName,
    Song,
    ReleaseDate,
    Lyrics,
}
