use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Online,
    Warning,
    Offline,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentStatus::Online => write!(f, "online"),
            EquipmentStatus::Warning => write!(f, "warning"),
            EquipmentStatus::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(EquipmentStatus::Online),
            "warning" => Ok(EquipmentStatus::Warning),
            "offline" => Ok(EquipmentStatus::Offline),
            other => Err(AppError::Validation(format!(
                "Unknown equipment status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Irrigation,
    Monitoring,
    Sensor,
    Drone,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: u32,
    pub name: String,
    pub status: EquipmentStatus,
    pub location: String,
    /// Battery level in percent
    pub battery: u8,
    pub last_active: String,
    pub alerts: u32,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentSummary {
    pub total: usize,
    pub online: usize,
    pub warning: usize,
    pub offline: usize,
    pub open_alerts: u32,
    pub low_battery: Vec<u32>,
    pub online_percent: f64,
}
