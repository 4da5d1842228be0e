use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_account_table::Account;

static IDX_SEARCH_HISTORY_ACCOUNT_ID: &str = "idx_search_history_account_id";
static FK_SEARCH_HISTORY_ACCOUNT_ID: &str = "fk_search_history_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(SearchHistory::Id))
                    .col(integer(SearchHistory::AccountId))
                    .col(string(SearchHistory::Term))
                    .col(timestamp(SearchHistory::SearchedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEARCH_HISTORY_ACCOUNT_ID)
                    .table(SearchHistory::Table)
                    .col(SearchHistory::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEARCH_HISTORY_ACCOUNT_ID)
                    .from_tbl(SearchHistory::Table)
                    .from_col(SearchHistory::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
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
                    .name(FK_SEARCH_HISTORY_ACCOUNT_ID)
                    .table(SearchHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEARCH_HISTORY_ACCOUNT_ID)
                    .table(SearchHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SearchHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SearchHistory {
    Table,
    Id,
    AccountId,
    Term,
    SearchedAt,
}
