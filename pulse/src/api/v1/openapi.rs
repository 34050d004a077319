use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pulse API",
        version = "1.0.0",
        description = "Brand mention monitoring. Scores sentiment, clusters topics and flags volume spikes as mentions arrive.",
    ),
    paths(
        handlers::health::health_check,
        handlers::mentions::list_mentions,
        handlers::mentions::create_mention,
        handlers::export::export_mentions,
        handlers::analytics::get_analytics,
        handlers::keywords::get_keywords,
        handlers::keywords::replace_keywords,
        handlers::simulator::toggle_simulator,
        handlers::events::stream_events,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Domain
        models::Platform,
        models::SentimentLabel,
        models::Mention,
        models::TopicCluster,
        models::MentionsPage,
        models::SentimentBreakdown,
        models::Analytics,
        models::SpikeAlert,
        models::InitSnapshot,
        // Requests
        dto::CreateMentionRequest,
        dto::UpdateKeywordsRequest,
        dto::KeywordsResponse,
        dto::SimulatorAction,
        dto::SimulatorRequest,
        dto::SimulatorResponse,
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "mentions", description = "Mention ingestion, search and export"),
        (name = "analytics", description = "Sentiment totals"),
        (name = "keywords", description = "Tracked keyword set"),
        (name = "simulator", description = "Simulated mention feed control"),
        (name = "events", description = "Live event stream"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
