pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityStore;
use routes::activities;

/// Builds the full application: API routes, the static front-end under
/// `/static`, and the shared layers.
pub fn router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    let api_routes = Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/remove",
            delete(activities::remove_participant_handler),
        );

    Router::new()
        .route("/", get(activities::root_handler))
        .merge(api_routes)
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(store)
}
