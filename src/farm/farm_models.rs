use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Warning,
    Alert,
    Info,
}

impl std::str::FromStr for AlertType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(AlertType::Warning),
            "alert" => Ok(AlertType::Alert),
            "info" => Ok(AlertType::Info),
            other => Err(AppError::Validation(format!("Unknown alert type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldAlert {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub time: String,
    pub description: String,
    pub affected_area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CropMetric {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Percent of plants rated healthy
    pub health_rate: u8,
    pub growth_stage: String,
    pub yield_prediction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SoilCondition {
    pub area: String,
    pub ph: f64,
    /// Moisture in percent
    pub moisture: u8,
    /// Moisture under the drought threshold
    pub dry: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDistribution {
    pub healthy: u32,
    pub concern: u32,
    pub unhealthy: u32,
    pub healthy_percent: f64,
    pub concern_percent: f64,
    pub unhealthy_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmOverview {
    pub total_crops: u32,
    pub health_rate: f64,
    pub alert_count: usize,
    /// Tonnes per mu
    pub yield_prediction: f64,
    pub crops_trend: Trend,
    pub health_trend: Trend,
    pub alert_trend: Trend,
    pub yield_trend: Trend,
    pub health_distribution: HealthDistribution,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmActivity {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub date: String,
    pub description: String,
    pub crop_type: String,
    pub duration: String,
}

/// One point of the weekly crop health series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CropHealthPoint {
    pub date: String,
    pub health_index: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnvironmentalReading {
    pub time: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Lux
    pub light: u32,
    /// Millimetres
    pub rainfall: f64,
    pub cloud_cover: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClimateEvent {
    pub year: String,
    pub events: u32,
    pub losses: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdaptationMeasure {
    pub measure: String,
    pub implementation: u8,
    pub effectiveness: u8,
}

/// Climate resilience indices (0-100) with event history and measures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClimateResilience {
    pub resilience_score: u8,
    pub drought_resistance: u8,
    pub flood_resistance: u8,
    pub temperature_adaptation: u8,
    pub pest_resistance: u8,
    pub climate_events: Vec<ClimateEvent>,
    pub adaptation_measures: Vec<AdaptationMeasure>,
}
