use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Closed set of notification categories. Used for filtering and icon
/// selection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    System,
    Reminder,
    Warning,
    Report,
    Maintenance,
}

impl NotificationType {
    pub const ALL: [NotificationType; 5] = [
        NotificationType::Warning,
        NotificationType::Reminder,
        NotificationType::Report,
        NotificationType::System,
        NotificationType::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::System => "system",
            NotificationType::Reminder => "reminder",
            NotificationType::Warning => "warning",
            NotificationType::Report => "report",
            NotificationType::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationType::System => "系统通知",
            NotificationType::Reminder => "提醒事项",
            NotificationType::Warning => "预警通知",
            NotificationType::Report => "数据报告",
            NotificationType::Maintenance => "设备维护",
        }
    }

    /// Icon hint for the console; unknown styling falls back to "info-circle".
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Warning => "exclamation-triangle",
            NotificationType::Reminder => "bell",
            NotificationType::Report => "chart-line",
            NotificationType::Maintenance => "wrench",
            NotificationType::System => "info-circle",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(NotificationType::System),
            "reminder" => Ok(NotificationType::Reminder),
            "warning" => Ok(NotificationType::Warning),
            "report" => Ok(NotificationType::Report),
            "maintenance" => Ok(NotificationType::Maintenance),
            other => Err(AppError::Validation(format!(
                "Unknown notification type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationRecord {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Display text such as "今天 08:30", not a parsed timestamp.
    pub time: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationType,
}

impl NotificationRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
        kind: NotificationType,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            time: time.into(),
            read: false,
            kind,
        }
    }
}
