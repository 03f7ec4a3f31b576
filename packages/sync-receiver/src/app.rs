//! Receiver application - accepts sync batches from the editor tool.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use material_sync::SyncRecord;

/// Response body for an accepted batch.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiveSummary {
    pub status: String,
    pub received: usize,
}

/// Build the receiver router.
///
/// The sync request comes from a page on the editor's origin, so CORS is
/// restricted to exactly that origin, POST/OPTIONS only.
pub fn build_app(allowed_origin: &str) -> Router {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .expect("allowed origin must be a valid header value");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/sync-material", post(receive_batch))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Accept a batch of sync records.
///
/// An empty array is a valid batch; malformed JSON is rejected with 400
/// by the extractor before this runs.
async fn receive_batch(Json(records): Json<Vec<SyncRecord>>) -> Json<ReceiveSummary> {
    info!(records = records.len(), "received sync batch");

    for record in &records {
        debug!(
            material = %record.name,
            attributes = record.data.len(),
            "material received"
        );
    }

    Json(ReceiveSummary {
        status: "ok".to_string(),
        received: records.len(),
    })
}

async fn health() -> &'static str {
    "ok"
}
