use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::farm_models::{
    AlertType, ClimateResilience, CropHealthPoint, CropMetric, EnvironmentalReading, FarmActivity,
    FarmOverview, FieldAlert, SoilCondition,
};
use crate::{
    error::{AppError, Result},
    extract::IdPath,
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlertFilters {
    /// warning, alert or info
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Farm KPIs and crop health distribution
#[utoipa::path(
    get,
    path = "/api/farm/overview",
    responses(
        (status = 200, description = "Farm overview", body = FarmOverview)
    ),
    tag = "farm"
)]
pub async fn get_overview(State(state): State<AppState>) -> Json<FarmOverview> {
    Json(state.farm_repository.overview())
}

/// Crop metrics per crop type
#[utoipa::path(
    get,
    path = "/api/farm/crops",
    responses(
        (status = 200, description = "Crop metrics", body = Vec<CropMetric>)
    ),
    tag = "farm"
)]
pub async fn get_crops(State(state): State<AppState>) -> Json<Vec<CropMetric>> {
    Json(state.farm_repository.crops().to_vec())
}

/// A single crop
#[utoipa::path(
    get,
    path = "/api/farm/crops/{id}",
    params(
        ("id" = u32, Path, description = "Crop ID")
    ),
    responses(
        (status = 200, description = "Crop metric", body = CropMetric),
        (status = 404, description = "Crop not found")
    ),
    tag = "farm"
)]
pub async fn get_crop(
    State(state): State<AppState>,
    IdPath(crop_id): IdPath,
) -> Result<Json<CropMetric>> {
    let crop = state
        .farm_repository
        .find_crop(crop_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Crop not found".to_string()))?;

    Ok(Json(crop))
}

/// Soil conditions per field area
#[utoipa::path(
    get,
    path = "/api/farm/soil",
    responses(
        (status = 200, description = "Soil conditions", body = Vec<SoilCondition>)
    ),
    tag = "farm"
)]
pub async fn get_soil(State(state): State<AppState>) -> Json<Vec<SoilCondition>> {
    Json(state.farm_repository.soil_conditions())
}

/// Recent field alerts
#[utoipa::path(
    get,
    path = "/api/farm/alerts",
    params(AlertFilters),
    responses(
        (status = 200, description = "Field alerts", body = Vec<FieldAlert>),
        (status = 400, description = "Unknown alert type")
    ),
    tag = "farm"
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(filters): Query<AlertFilters>,
) -> Result<Json<Vec<FieldAlert>>> {
    let kind = filters
        .kind
        .as_deref()
        .map(str::parse::<AlertType>)
        .transpose()?;

    Ok(Json(state.farm_repository.alerts(kind)))
}

/// Recent field activities
#[utoipa::path(
    get,
    path = "/api/farm/activities",
    responses(
        (status = 200, description = "Recent activities", body = Vec<FarmActivity>)
    ),
    tag = "farm"
)]
pub async fn get_activities(State(state): State<AppState>) -> Json<Vec<FarmActivity>> {
    Json(state.farm_repository.activities().to_vec())
}

/// Weekly crop health index
#[utoipa::path(
    get,
    path = "/api/farm/crop-health",
    responses(
        (status = 200, description = "Crop health series", body = Vec<CropHealthPoint>)
    ),
    tag = "farm"
)]
pub async fn get_crop_health(State(state): State<AppState>) -> Json<Vec<CropHealthPoint>> {
    Json(state.farm_repository.crop_health().to_vec())
}

/// Temperature, humidity, light, rainfall and cloud cover through the day
#[utoipa::path(
    get,
    path = "/api/farm/environment",
    responses(
        (status = 200, description = "Environmental readings", body = Vec<EnvironmentalReading>)
    ),
    tag = "farm"
)]
pub async fn get_environment(State(state): State<AppState>) -> Json<Vec<EnvironmentalReading>> {
    Json(state.farm_repository.environment().to_vec())
}

/// Climate resilience indices, climate events and adaptation measures
#[utoipa::path(
    get,
    path = "/api/farm/climate-resilience",
    responses(
        (status = 200, description = "Climate resilience", body = ClimateResilience)
    ),
    tag = "farm"
)]
pub async fn get_climate_resilience(State(state): State<AppState>) -> Json<ClimateResilience> {
    Json(state.farm_repository.climate_resilience().clone())
}
