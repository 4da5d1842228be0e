pub use super::account::Entity as Account;
pub use super::favorite::Entity as Favorite;
pub use super::place::Entity as Place;
pub use super::search_history::Entity as SearchHistory;
