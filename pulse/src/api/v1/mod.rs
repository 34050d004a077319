pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{
        ClusteringConfig, Config, PipelineConfig, ServerConfig, SimulatorConfig, SpikeConfig,
    };
    use crate::services::{ManualClock, SimulatedSource};

    const NOW: i64 = 1_700_000_000_000;

    fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            pipeline: PipelineConfig {
                export_limit: 2,
                ..PipelineConfig::default()
            },
            clustering: ClusteringConfig::default(),
            spike: SpikeConfig::default(),
            simulator: SimulatorConfig {
                enabled: false,
                ..SimulatorConfig::default()
            },
        };

        let clock = Arc::new(ManualClock::new(NOW));
        let source = SimulatedSource::seeded(7, clock.clone());
        AppState::new(config, clock, Box::new(source))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_store_size() {
        let app = create_router(test_state());

        let response = app.oneshot(get("/api/v1/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["mentions"], 0);
        assert_eq!(json["data"]["simulatorRunning"], false);
    }

    #[tokio::test]
    async fn created_mention_is_scored_and_listed() {
        let state = test_state();
        let app = create_router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/mentions",
                r#"{"platform":"reddit","text":"Love the launch, great product"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], "1");
        assert_eq!(json["data"]["source"], "Reddit");
        assert_eq!(json["data"]["sentimentLabel"], "positive");
        assert_eq!(json["data"]["timestamp"], NOW);

        let response = app.oneshot(get("/api/v1/mentions?q=LAUNCH")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["topics"].as_array().unwrap().len(), 1);
        assert_eq!(state.pipeline.len(), 1);
    }

    #[tokio::test]
    async fn blank_mention_text_is_rejected() {
        let app = create_router(test_state());

        let response = app
            .oneshot(post_json(
                "/api/v1/mentions",
                r#"{"platform":"news","text":"   "}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn query_without_matches_returns_empty_page() {
        let state = test_state();
        state.feed.seed(5);
        let app = create_router(state);

        let response = app
            .oneshot(get("/api/v1/mentions?q=zzzz-no-such-text"))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 0);
        assert!(json["data"]["mentions"].as_array().unwrap().is_empty());
        assert!(json["data"]["topics"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn analytics_counts_every_label() {
        let state = test_state();
        let app = create_router(state.clone());

        for text in ["great love", "terrible outage", "just a note"] {
            let body = format!(r#"{{"platform":"blog","text":"{text}"}}"#);
            let response = app
                .clone()
                .oneshot(post_json("/api/v1/mentions", &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get("/api/v1/analytics")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 3);
        assert_eq!(json["data"]["bySentiment"]["positive"], 1);
        assert_eq!(json["data"]["bySentiment"]["negative"], 1);
        assert_eq!(json["data"]["bySentiment"]["neutral"], 1);
        assert_eq!(json["data"]["lastUpdated"], NOW);
    }

    #[tokio::test]
    async fn keywords_accept_comma_separated_string() {
        let app = create_router(test_state());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/keywords",
                r#"{"keywords":" acme , , pricing "}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["keywords"], serde_json::json!(["acme", "pricing"]));

        let response = app.oneshot(get("/api/v1/keywords")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["keywords"], serde_json::json!(["acme", "pricing"]));
    }

    #[tokio::test]
    async fn missing_keywords_are_rejected() {
        let state = test_state();
        let before = state.pipeline.keywords();
        let app = create_router(state.clone());

        let response = app
            .oneshot(post_json("/api/v1/keywords", r#"{}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.pipeline.keywords(), before);
    }

    #[tokio::test]
    async fn export_returns_latest_rows_as_csv() {
        let state = test_state();
        state.feed.seed(3);
        let app = create_router(state);

        let response = app.oneshot(get("/api/v1/mentions:export")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/csv"));
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("mentions_export.csv"));

        let text = body_text(response).await;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "id,timestamp,source,platform,sentimentLabel,sentimentScore,text"
        );
        // export_limit is 2: header plus the two newest, oldest first.
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2,"));
        assert!(lines[2].starts_with("3,"));
    }

    #[tokio::test]
    async fn simulator_toggle_reports_state() {
        let state = test_state();
        let app = create_router(state.clone());

        let response = app
            .oneshot(post_json("/api/v1/simulator", r#"{"action":"start"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["simulatorRunning"], true);
        assert!(state.feed.is_running());
    }

    #[tokio::test]
    async fn event_stream_uses_sse_content_type() {
        let app = create_router(test_state());

        let response = app.oneshot(get("/api/v1/events")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/event-stream"));
    }

    #[tokio::test]
    async fn openapi_lists_mention_routes() {
        let app = create_router(test_state());

        let response = app.oneshot(get("/api/v1/openapi.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/api/v1/mentions"].is_object());
        assert!(json["paths"]["/api/v1/events"].is_object());
    }
}
