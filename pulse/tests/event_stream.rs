use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use futures::StreamExt;
use tower::ServiceExt;

use pulse::api::{create_router, AppState};
use pulse::config::{Config, SimulatorConfig};
use pulse::models::{Event, MentionDraft, Platform};
use pulse::services::{ManualClock, SimulatedSource};

const NOW: i64 = 1_700_000_000_000;

fn state() -> AppState {
    let config = Config {
        simulator: SimulatorConfig {
            enabled: false,
            ..SimulatorConfig::default()
        },
        ..Config::default()
    };
    let clock = Arc::new(ManualClock::new(NOW));
    let source = SimulatedSource::seeded(11, clock.clone());
    AppState::new(config, clock, Box::new(source))
}

async fn next_frame<S>(stream: &mut S) -> String
where
    S: futures::Stream<Item = Result<axum::body::Bytes, axum::Error>> + Unpin,
{
    let chunk = tokio::time::timeout(Duration::from_secs(2), stream.next())
        .await
        .expect("frame in time")
        .expect("stream open")
        .expect("chunk");
    String::from_utf8(chunk.to_vec()).expect("utf8")
}

#[tokio::test]
async fn observer_gets_init_then_live_events() {
    let state = state();
    state.feed.seed(2);
    let app = create_router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let mut body = response.into_body().into_data_stream();

    let init = next_frame(&mut body).await;
    assert!(init.starts_with("event: init\n"));
    assert!(init.contains("\"keywords\""));
    assert!(init.contains("\"total\":2"));

    state
        .pipeline
        .ingest(MentionDraft::new(Platform::Forum, "stuck on a bug", NOW));
    let frame = next_frame(&mut body).await;
    assert!(frame.starts_with("event: new_mention\n"));
    assert!(frame.contains("\"id\":\"3\""));
    assert!(frame.contains("\"sentimentLabel\":\"negative\""));

    state.feed.set_running(true);
    let frame = next_frame(&mut body).await;
    assert!(frame.starts_with("event: simulator_state\n"));
    assert!(frame.contains("\"simulatorRunning\":true"));
}

#[tokio::test]
async fn channel_delivers_events_in_emit_order() {
    let state = state();
    let mut rx = state.events.subscribe();

    state
        .pipeline
        .ingest(MentionDraft::new(Platform::News, "first", NOW));
    state
        .pipeline
        .ingest(MentionDraft::new(Platform::News, "second", NOW));

    let ids: Vec<String> = [rx.recv().await.unwrap(), rx.recv().await.unwrap()]
        .into_iter()
        .map(|event| match event {
            Event::NewMention(mention) => mention.id,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}
