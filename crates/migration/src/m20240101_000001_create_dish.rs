//! Create `dish` table.
//! Optional text columns are nullable; `created_at` is indexed for newest-first listing.
//! `seq` is a store-assigned insertion counter that breaks `created_at` ties.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(uuid(Dish::Id).primary_key())
                    .col(text(Dish::Name).not_null())
                    .col(text_null(Dish::Description))
                    .col(text_null(Dish::Cuisine))
                    .col(timestamp_with_time_zone(Dish::CreatedAt).not_null())
                    .col(big_integer(Dish::Seq).auto_increment())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dish_created_at")
                    .table(Dish::Table)
                    .col(Dish::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dish::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dish {
    Table,
    Id,
    Name,
    Description,
    Cuisine,
    CreatedAt,
    Seq,
}
