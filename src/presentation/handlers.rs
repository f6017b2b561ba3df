// HTTP request handlers
use crate::domain::chart::ChartMode;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct CellValue {
    pub value: String,
}

#[derive(Deserialize)]
pub struct ModeSelection {
    pub mode: String,
}

#[derive(Deserialize)]
pub struct NewIdea {
    pub text: String,
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(StatusCode::OK, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current rows of the series store
pub async fn list_rows(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let rows = state.chart_service.rows().await;
    respond(&rows, &headers).await
}

pub async fn append_row(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let rows = state.chart_service.append_row().await;
    respond(&rows, &headers).await
}

pub async fn remove_last_row(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let rows = state.chart_service.remove_last_row().await;
    respond(&rows, &headers).await
}

/// Edit one grid cell; responds with the refreshed grid
pub async fn edit_cell(
    Path((row, column)): Path<(usize, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CellValue>,
) -> Result<Response, ApiError> {
    let grid = state
        .chart_service
        .edit_cell(row, &column, &body.value)
        .await?;
    Ok(respond(&grid, &headers).await)
}

pub async fn get_grid(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let grid = state.chart_service.grid().await;
    respond(&grid, &headers).await
}

/// Chart in the requested mode, falling back to the session's selection
pub async fn get_chart(
    Query(query): Query<ChartQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let mode = query
        .mode
        .as_deref()
        .map(str::parse::<ChartMode>)
        .transpose()?;
    let chart = state.chart_service.chart(mode).await;
    Ok(respond(&chart, &headers).await)
}

#[derive(Serialize)]
pub struct ModeView {
    pub mode: ChartMode,
}

pub async fn get_mode(State(state): State<Arc<AppState>>) -> Json<ModeView> {
    Json(ModeView {
        mode: state.chart_service.selected_mode().await,
    })
}

pub async fn select_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ModeSelection>,
) -> Result<StatusCode, ApiError> {
    let mode: ChartMode = body.mode.parse()?;
    state.chart_service.select_mode(mode).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_ideas(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let ideas = state.idea_service.list_ideas().await;
    respond(&ideas, &headers).await
}

pub async fn add_idea(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewIdea>,
) -> Result<Response, ApiError> {
    let ideas = state.idea_service.add_idea(&body.text).await?;
    Ok(respond(&ideas, &headers).await)
}

pub async fn delete_idea(
    Path(index): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let ideas = state.idea_service.delete_idea(index).await?;
    Ok(respond(&ideas, &headers).await)
}

/// Activity log, newest first
pub async fn list_activity(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let activity = state.idea_service.activity().await;
    respond(&activity, &headers).await
}
