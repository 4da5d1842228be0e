//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Constructs an Axum router with all authentication, place discovery,
/// favorite, account, and administration endpoints registered. Each endpoint
/// is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document served at `/api/docs/openapi.json`, with
/// Swagger UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Register an account and start a session
/// - `POST /api/auth/login` - Log in with email and password
/// - `POST /api/auth/unlock` - Unlock a locked account with the recovery PIN
/// - `POST /api/auth/guest` - Start an anonymous guest session
/// - `POST /api/auth/logout` - Log out the current session
/// - `GET /api/users/me` - Get the current account's profile
/// - `PUT /api/users/me` - Update the current account's profile
/// - `GET /api/users/me/searches` - Get the current account's recent searches
/// - `GET /api/places/search` - Search for food places
/// - `GET /api/places/catalog` - List every place in the catalog
/// - `GET /api/places/local` - List locally curated places
/// - `GET /api/places/{external_id}` - Get the details of a place
/// - `POST /api/favorites` - Save a place as favorite
/// - `GET /api/favorites` - List the current account's favorites
/// - `DELETE /api/favorites/{external_id}` - Remove a favorite
/// - `GET /api/favorites/{external_id}/status` - Check favorite status
/// - `GET /api/admin/users` - List all accounts
/// - `PUT /api/admin/users/{id}/role` - Change an account's role
/// - `PUT /api/admin/users/{id}/ban` - Ban or unban an account
/// - `PUT /api/admin/users/{id}/review-permission` - Toggle review permission
/// - `DELETE /api/admin/users/{id}` - Delete an account
/// - `GET /api/admin/stats` - Get usage statistics
/// - `POST /api/admin/places` - Add a curated place to the catalog
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Savora", description = "Savora API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "Account profile API routes"),
        (name = controller::place::PLACE_TAG, description = "Place discovery API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Administration API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::unlock))
        .routes(routes!(controller::auth::guest))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::get_profile,
            controller::user::update_profile
        ))
        .routes(routes!(controller::user::get_recent_searches))
        .routes(routes!(controller::place::search_places))
        .routes(routes!(controller::place::get_catalog_places))
        .routes(routes!(controller::place::get_local_places))
        .routes(routes!(controller::place::get_place_details))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::get_favorites
        ))
        .routes(routes!(controller::favorite::remove_favorite))
        .routes(routes!(controller::favorite::get_favorite_status))
        .routes(routes!(controller::admin::get_accounts))
        .routes(routes!(controller::admin::update_role))
        .routes(routes!(controller::admin::update_ban))
        .routes(routes!(controller::admin::update_review_permission))
        .routes(routes!(controller::admin::delete_account))
        .routes(routes!(controller::admin::get_stats))
        .routes(routes!(controller::admin::create_place))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
