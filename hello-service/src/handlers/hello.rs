use crate::models::Greeting;
use axum::Json;

/// `GET /api/hello`
#[tracing::instrument(name = "hello")]
pub async fn hello() -> Json<Greeting> {
    let greeting = Greeting::now();
    tracing::debug!(timestamp = %greeting.timestamp, "Serving greeting");
    Json(greeting)
}
