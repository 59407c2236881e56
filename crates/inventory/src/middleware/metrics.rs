use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::utils::{Method, Metrics, Status};
use tokio::time::Instant;

/// Counts every request and observes its latency, labelled by method and
/// response class.
pub async fn track_metrics(State(metrics): State<Metrics>, req: Request, next: Next) -> Response {
    let method = Method::from(req.method());
    let start = Instant::now();

    let response = next.run(req).await;

    metrics.record(
        method,
        Status::from(response.status()),
        start.elapsed().as_secs_f64(),
    );

    response
}
