use axum::Json;

use crate::interface_adapters::protocol::HealthResponse;

// Liveness probe for browsers, load balancers, and tests.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
