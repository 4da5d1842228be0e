use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::prelude::SearchHistory;
use entity::search_history;

pub struct SearchHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SearchHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        account_id: i32,
        term: &str,
    ) -> Result<search_history::Model, DbErr> {
        let entry = search_history::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            term: ActiveValue::Set(term.to_string()),
            searched_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// The account's most recent distinct search terms, newest first. Repeat
    /// searches keep their latest position.
    pub async fn recent_terms(&self, account_id: i32, limit: usize) -> Result<Vec<String>, DbErr> {
        let rows = SearchHistory::find()
            .filter(search_history::Column::AccountId.eq(account_id))
            .order_by_desc(search_history::Column::SearchedAt)
            .order_by_desc(search_history::Column::Id)
            .all(self.db)
            .await?;

        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for row in rows {
            if seen.insert(row.term.clone()) {
                terms.push(row.term);
                if terms.len() == limit {
                    break;
                }
            }
        }

        Ok(terms)
    }
}
