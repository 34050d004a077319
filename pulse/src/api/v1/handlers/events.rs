//! v1 event stream.
//!
//! Each observer first receives an `init` event carrying the snapshot, then
//! every event the pipeline and feed emit, named after the event kind.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::api::AppState;

/// `GET /api/v1/events`
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "events",
    responses(
        (status = 200, description = "Server-sent event stream: init, new_mention, spike_alert, keywords_updated, simulator_state", content_type = "text/event-stream", body = String),
    )
)]
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    // Subscribe before taking the snapshot so nothing emitted in between is missed.
    let mut rx = state.events.subscribe();
    let snapshot = state.pipeline.init_snapshot();
    debug!(observers = state.events.observer_count(), "Observer connected");

    let stream = async_stream::stream! {
        match SseEvent::default().event("init").json_data(&snapshot) {
            Ok(event) => yield Ok::<SseEvent, Infallible>(event),
            Err(e) => warn!(error = %e, "Failed to encode init snapshot"),
        }

        loop {
            match rx.recv().await {
                Ok(event) => {
                    let encoded = event
                        .payload()
                        .map_err(|e| e.to_string())
                        .and_then(|payload| {
                            SseEvent::default()
                                .event(event.name())
                                .json_data(payload)
                                .map_err(|e| e.to_string())
                        });
                    match encoded {
                        Ok(sse) => yield Ok::<SseEvent, Infallible>(sse),
                        Err(e) => warn!(event = event.name(), error = %e, "Failed to encode event"),
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Observer lagged behind, events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
