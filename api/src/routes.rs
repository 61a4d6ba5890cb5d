use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::{handlers, state::AppState};

// Every campground route uses the plural `/campgrounds` prefix, DELETE
// included.
pub fn campground_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/campgrounds",
            get(handlers::list_campgrounds).post(handlers::create_campground),
        )
        .route("/campgrounds/new", get(handlers::new_campground_form))
        .route(
            "/campgrounds/:id",
            get(handlers::show_campground)
                .put(handlers::update_campground)
                .delete(handlers::delete_campground),
        )
        .route("/campgrounds/:id/edit", get(handlers::edit_campground_form))
}

pub fn review_routes() -> Router<AppState> {
    Router::new().route(
        "/campgrounds/:id/reviews",
        axum::routing::post(handlers::create_review),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

/// Full application router: all routes, the catch-all 404, and request
/// logging.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(campground_routes())
        .merge(review_routes())
        .merge(health_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!("{method} {uri} {status} {elapsed}ms");

    response
}
