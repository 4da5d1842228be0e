pub mod prelude;

pub mod account;
pub mod favorite;
pub mod place;
pub mod search_history;
