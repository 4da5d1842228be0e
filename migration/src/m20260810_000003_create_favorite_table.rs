use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260810_000001_create_account_table::Account, m20260810_000002_create_place_table::Place,
};

static IDX_FAVORITE_ACCOUNT_ID: &str = "idx_favorite_account_id";
static IDX_FAVORITE_ACCOUNT_PLACE: &str = "idx_favorite_account_place";
static FK_FAVORITE_ACCOUNT_ID: &str = "fk_favorite_account_id";
static FK_FAVORITE_PLACE_ID: &str = "fk_favorite_place_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::AccountId))
                    .col(integer(Favorite::PlaceId))
                    .col(string_null(Favorite::ExternalId))
                    .col(timestamp(Favorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_ACCOUNT_ID)
                    .table(Favorite::Table)
                    .col(Favorite::AccountId)
                    .to_owned(),
            )
            .await?;

        // One favorite per account and place; concurrent duplicate inserts
        // surface as a unique constraint violation.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_ACCOUNT_PLACE)
                    .table(Favorite::Table)
                    .col(Favorite::AccountId)
                    .col(Favorite::PlaceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_ACCOUNT_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLACE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::PlaceId)
                    .to_tbl(Place::Table)
                    .to_col(Place::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLACE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_ACCOUNT_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_ACCOUNT_PLACE)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_ACCOUNT_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    AccountId,
    PlaceId,
    ExternalId,
    CreatedAt,
}
