use sea_orm::DatabaseConnection;

use crate::{places::PlacesClient, util::jwt::TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub places: PlacesClient,
    pub tokens: TokenIssuer,
}
