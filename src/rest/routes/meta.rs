use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::AppContext;

/// Root endpoint: service metadata and endpoint listing.
pub async fn service_info(State(ctx): State<AppContext>) -> Json<Value> {
    Json(json!({
        "message": "Business Insight API",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": ctx.started_at.elapsed().as_secs(),
        "endpoints": {
            "POST /business-data": "Get business insights",
            "GET /regenerate-headline": "Generate new SEO headline",
            "GET /health": "Health check",
        },
    }))
}
