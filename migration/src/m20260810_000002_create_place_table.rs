use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLACE_EXTERNAL_ID: &str = "idx_place_external_id";
static IDX_PLACE_SOURCE: &str = "idx_place_source";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Place::Table)
                    .if_not_exists()
                    .col(pk_auto(Place::Id))
                    .col(string_null(Place::ExternalId))
                    .col(string(Place::Name))
                    .col(string_null(Place::Address))
                    .col(double_null(Place::Latitude))
                    .col(double_null(Place::Longitude))
                    .col(double_null(Place::Rating))
                    .col(integer_null(Place::RatingCount))
                    .col(integer_null(Place::PriceLevel))
                    .col(boolean_null(Place::OpenNow))
                    .col(string_null(Place::Category))
                    .col(string_null(Place::PhotoRef))
                    .col(string(Place::Source))
                    .col(integer_null(Place::CreatedBy))
                    .col(timestamp(Place::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Unique on a nullable column; duplicate external IDs are rejected while
        // rows without one remain unrestricted.
        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACE_EXTERNAL_ID)
                    .table(Place::Table)
                    .col(Place::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACE_SOURCE)
                    .table(Place::Table)
                    .col(Place::Source)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACE_SOURCE)
                    .table(Place::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACE_EXTERNAL_ID)
                    .table(Place::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Place::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Place {
    Table,
    Id,
    ExternalId,
    Name,
    Address,
    Latitude,
    Longitude,
    Rating,
    RatingCount,
    PriceLevel,
    OpenNow,
    Category,
    PhotoRef,
    Source,
    CreatedBy,
    CreatedAt,
}
