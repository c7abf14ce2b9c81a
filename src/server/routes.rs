use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware, AppState};

/// Build the proxy router
pub fn router(state: AppState) -> Router {
    with_layers(
        Router::new()
            .route("/", get(handlers::health))
            .route("/sports", get(handlers::handle_sports))
            .route("/events", get(handlers::handle_events))
            .route("/snapshot", get(handlers::handle_snapshot))
            .fallback(handlers::not_found),
    )
    .with_state(state)
}

/// Panic conversion innermost, CORS around it, tracing outermost
fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(TraceLayer::new_for_http())
}
