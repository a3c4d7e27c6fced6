// HTTP request handlers
use crate::application::configurator_service::{OptionsPayload, QuotePayload};
use crate::domain::dashboard::DashboardSummary;
use crate::domain::quote::Selection;
use crate::domain::solution::SolutionSummary;
use crate::domain::vehicle::Vehicle;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    #[serde(alias = "brand")]
    pub merk: Option<String>,
    /// Kept as text so the wizard's blank "any year" choice is not a parse error
    #[serde(alias = "year")]
    pub bouwjaar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardsQuery {
    #[serde(rename = "vehicleId", alias = "modelId", alias = "autoId")]
    pub vehicle_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SolutionsQuery {
    #[serde(rename = "vehicleId", alias = "autoId")]
    pub vehicle_id: Option<String>,
    #[serde(rename = "dashboardTypeId")]
    pub dashboard_type_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<Vehicle>,
}

#[derive(Debug, Serialize)]
pub struct DashboardsResponse {
    pub dashboards: Vec<DashboardSummary>,
}

#[derive(Debug, Serialize)]
pub struct SolutionsResponse {
    pub solutions: Vec<SolutionSummary>,
}

/// Blank values count as missing.
fn required(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ApiError::MissingParameter(name))
}

/// Blank means "no filter"; anything else must be a whole year.
fn optional_year(value: Option<&str>, name: &'static str) -> Result<Option<i32>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidParameter(name)),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Full priced-option catalog
pub async fn get_options(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OptionsPayload>, ApiError> {
    let payload = state.configurator_service.get_options().await?;
    Ok(Json(payload))
}

/// Vehicles filtered by brand and build year
pub async fn get_models(
    Query(query): Query<ModelsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let brand = query.merk.as_deref().filter(|m| !m.is_empty());
    let year = optional_year(query.bouwjaar.as_deref(), "bouwjaar")?;
    let models = state
        .configurator_service
        .get_models(brand, year)
        .await?;
    Ok(Json(ModelsResponse { models }))
}

/// Dashboard types available for a vehicle
pub async fn get_dashboards(
    Query(query): Query<DashboardsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardsResponse>, ApiError> {
    let vehicle_id = required(query.vehicle_id, "vehicleId")?;
    let dashboards = state.configurator_service.get_dashboards(&vehicle_id).await?;
    Ok(Json(DashboardsResponse { dashboards }))
}

/// Solutions for a vehicle with a given dashboard type
pub async fn get_solutions(
    Query(query): Query<SolutionsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SolutionsResponse>, ApiError> {
    let vehicle_id = required(query.vehicle_id, "vehicleId")?;
    let dashboard_type_id = required(query.dashboard_type_id, "dashboardTypeId")?;
    let solutions = state
        .configurator_service
        .get_solutions(&vehicle_id, &dashboard_type_id)
        .await?;
    Ok(Json(SolutionsResponse { solutions }))
}

/// Price a selection against the current catalog
pub async fn post_quote(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<Selection>,
) -> Result<Json<QuotePayload>, ApiError> {
    let payload = state.configurator_service.post_quote(&selection).await?;
    Ok(Json(payload))
}
