use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let mentions = Router::new().route(
        "/",
        get(handlers::mentions::list_mentions).post(handlers::mentions::create_mention),
    );

    let keywords = Router::new().route(
        "/",
        get(handlers::keywords::get_keywords).post(handlers::keywords::replace_keywords),
    );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .nest("/mentions", mentions)
        .route(
            "/mentions:export",
            get(handlers::export::export_mentions),
        )
        .nest("/keywords", keywords)
        .route("/analytics", get(handlers::analytics::get_analytics))
        .route("/simulator", post(handlers::simulator::toggle_simulator))
        .route("/events", get(handlers::events::stream_events))
}
