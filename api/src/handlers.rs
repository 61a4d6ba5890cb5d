use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use shared::{CampgroundPayload, ReviewPayload};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    store::StoreError,
    validation, views,
};

fn store_internal_error(operation: &str, err: StoreError) -> AppError {
    tracing::error!(operation = operation, error = ?err, "store operation failed");
    AppError::internal()
}

fn map_json_rejection(err: JsonRejection) -> AppError {
    AppError::bad_request(format!("Invalid payload: {}", err.body_text()))
}

fn campground_not_found() -> AppError {
    AppError::not_found("Campground not found")
}

// An id segment that is not a UUID can never resolve to a campground, so
// it gets the same rendered 404 as a well-formed id with no match.
fn parse_id(id: Result<Path<Uuid>, PathRejection>) -> AppResult<Uuid> {
    let Path(id) = id.map_err(|_| campground_not_found())?;
    Ok(id)
}

fn redirect(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn new_campground_form() -> Html<String> {
    Html(views::new_form())
}

pub async fn list_campgrounds(State(state): State<AppState>) -> AppResult<Html<String>> {
    let campgrounds = state
        .store
        .list()
        .await
        .map_err(|err| store_internal_error("list campgrounds", err))?;

    Ok(Html(views::campground_list(&campgrounds)))
}

pub async fn create_campground(
    State(state): State<AppState>,
    payload: Result<Json<CampgroundPayload>, JsonRejection>,
) -> AppResult<Response> {
    let Json(payload) = payload.map_err(map_json_rejection)?;
    let fields = validation::validate_campground(&payload.campground)
        .map_err(AppError::validation)?;

    let campground = state
        .store
        .create(fields)
        .await
        .map_err(|err| store_internal_error("create campground", err))?;

    tracing::info!(id = %campground.id, title = %campground.title, "campground created");
    Ok(redirect(format!("/campgrounds/{}", campground.id)))
}

pub async fn show_campground(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Html<String>> {
    let id = parse_id(id)?;
    let campground = state
        .store
        .get(id)
        .await
        .map_err(|err| store_internal_error("get campground", err))?
        .ok_or_else(campground_not_found)?;

    let reviews = state
        .store
        .reviews_for(id)
        .await
        .map_err(|err| store_internal_error("list reviews", err))?;

    Ok(Html(views::campground_detail(&campground, &reviews)))
}

pub async fn edit_campground_form(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Html<String>> {
    let id = parse_id(id)?;
    let campground = state
        .store
        .get(id)
        .await
        .map_err(|err| store_internal_error("get campground", err))?
        .ok_or_else(campground_not_found)?;

    Ok(Html(views::edit_form(&campground)))
}

pub async fn update_campground(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CampgroundPayload>, JsonRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    let Json(payload) = payload.map_err(map_json_rejection)?;
    let fields = validation::validate_campground(&payload.campground)
        .map_err(AppError::validation)?;

    let campground = state
        .store
        .update(id, fields)
        .await
        .map_err(|err| store_internal_error("update campground", err))?
        .ok_or_else(campground_not_found)?;

    tracing::info!(id = %campground.id, "campground updated");
    Ok(redirect(format!("/campgrounds/{}", campground.id)))
}

pub async fn delete_campground(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|err| store_internal_error("delete campground", err))?;

    if !deleted {
        return Err(campground_not_found());
    }

    tracing::info!(id = %id, "campground deleted");
    Ok(redirect("/campgrounds".to_string()))
}

pub async fn create_review(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ReviewPayload>, JsonRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    let Json(payload) = payload.map_err(map_json_rejection)?;

    let review = state
        .store
        .add_review(id, payload.review.body, payload.review.rating)
        .await
        .map_err(|err| store_internal_error("add review", err))?
        .ok_or_else(campground_not_found)?;

    tracing::info!(id = %review.id, campground_id = %id, "review added");
    Ok(redirect(format!("/campgrounds/{id}")))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "uptime_secs": uptime
            })),
        ),
        Err(err) => {
            tracing::warn!(error = ?err, uptime_secs = uptime, "health check degraded");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "uptime_secs": uptime
                })),
            )
        }
    }
}

pub async fn route_not_found() -> AppError {
    AppError::not_found("Page not found")
}
