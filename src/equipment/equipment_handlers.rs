use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::equipment_models::{Equipment, EquipmentStatus, EquipmentSummary};
use crate::{
    error::{AppError, Result},
    extract::IdPath,
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentFilters {
    /// online, warning or offline
    pub status: Option<String>,
}

/// List farm equipment
#[utoipa::path(
    get,
    path = "/api/equipment",
    params(EquipmentFilters),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 400, description = "Unknown status")
    ),
    tag = "equipment"
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Query(filters): Query<EquipmentFilters>,
) -> Result<Json<Vec<Equipment>>> {
    let status = filters
        .status
        .as_deref()
        .map(str::parse::<EquipmentStatus>)
        .transpose()?;

    if let Some(status) = status {
        tracing::debug!(%status, "Listing equipment by status");
    }

    Ok(Json(state.equipment_repository.list(status)))
}

/// Equipment status counts, alerts and low-battery devices
#[utoipa::path(
    get,
    path = "/api/equipment/summary",
    responses(
        (status = 200, description = "Equipment summary", body = EquipmentSummary)
    ),
    tag = "equipment"
)]
pub async fn get_equipment_summary(State(state): State<AppState>) -> Json<EquipmentSummary> {
    Json(state.equipment_repository.summary())
}

/// A single device
#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    params(
        ("id" = u32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Equipment", body = Equipment),
        (status = 404, description = "Equipment not found")
    ),
    tag = "equipment"
)]
pub async fn get_equipment_by_id(
    State(state): State<AppState>,
    IdPath(equipment_id): IdPath,
) -> Result<Json<Equipment>> {
    let device = state
        .equipment_repository
        .find_by_id(equipment_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))?;

    Ok(Json(device))
}
