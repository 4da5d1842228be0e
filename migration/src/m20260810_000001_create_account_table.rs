use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_uniq(Account::Name))
                    .col(string_uniq(Account::Email))
                    .col(string(Account::PasswordHash))
                    .col(string_null(Account::RecoveryPinHash))
                    .col(string(Account::Role))
                    .col(boolean(Account::Banned))
                    .col(boolean(Account::CanReview))
                    .col(integer(Account::FailedLoginAttempts))
                    .col(boolean(Account::TemporaryLock))
                    .col(string_null(Account::ProfileImageUrl))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp_null(Account::LastLoginAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    RecoveryPinHash,
    Role,
    Banned,
    CanReview,
    FailedLoginAttempts,
    TemporaryLock,
    ProfileImageUrl,
    CreatedAt,
    LastLoginAt,
}
