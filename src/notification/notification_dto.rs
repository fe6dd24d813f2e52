use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{
    notification_filter::{CategoryFilter, NotificationQuery},
    notification_view::{NotificationChange, NotificationIntent},
};
use crate::error::{AppError, Result};

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotificationsQuery {
    /// `all` or one of system, reminder, warning, report, maintenance
    pub category: Option<String>,
    /// Case-insensitive substring of title or message
    #[validate(length(max = 200))]
    pub search: Option<String>,
}

impl ListNotificationsQuery {
    pub fn into_query(self) -> Result<NotificationQuery> {
        self.validate()?;

        let category = match self.category.as_deref() {
            None | Some("") => CategoryFilter::All,
            Some(raw) => raw.parse()?,
        };

        Ok(NotificationQuery::new(
            category,
            self.search.as_deref().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountResponse {
    pub unread_count: usize,
}

/// Result of a mark-read or delete on a single id. `changed` is false for an
/// unknown id or an already-read record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationMutationResponse {
    pub id: u32,
    pub changed: bool,
    pub unread_count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkAllReadResponse {
    pub updated: usize,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntentAction {
    Open,
    ToggleRead,
    Delete,
    MarkAllRead,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotificationIntentRequest {
    pub action: IntentAction,
    pub id: Option<u32>,
}

impl TryFrom<NotificationIntentRequest> for NotificationIntent {
    type Error = AppError;

    fn try_from(request: NotificationIntentRequest) -> Result<Self> {
        let id = || {
            request
                .id
                .ok_or_else(|| AppError::BadRequest("Notification id is required".to_string()))
        };

        Ok(match request.action {
            IntentAction::Open => NotificationIntent::Open(id()?),
            IntentAction::ToggleRead => NotificationIntent::ToggleRead(id()?),
            IntentAction::Delete => NotificationIntent::Delete(id()?),
            IntentAction::MarkAllRead => NotificationIntent::MarkAllRead,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DispatchResponse {
    pub changed: bool,
    pub change: Option<NotificationChange>,
    pub unread_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::notification_models::NotificationType;

    #[test]
    fn test_missing_params_mean_all_and_empty_search() {
        let query = ListNotificationsQuery::default().into_query().unwrap();
        assert_eq!(query, NotificationQuery::default());
    }

    #[test]
    fn test_category_is_parsed() {
        let query = ListNotificationsQuery {
            category: Some("warning".into()),
            search: Some("降雨".into()),
        }
        .into_query()
        .unwrap();
        assert_eq!(query.category, CategoryFilter::Only(NotificationType::Warning));
        assert_eq!(query.search(), "降雨");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = ListNotificationsQuery {
            category: Some("urgent".into()),
            search: None,
        }
        .into_query()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_overlong_search_is_rejected() {
        let err = ListNotificationsQuery {
            category: None,
            search: Some("a".repeat(201)),
        }
        .into_query()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_intent_request_requires_id() {
        let request = NotificationIntentRequest {
            action: IntentAction::Delete,
            id: None,
        };
        let err = NotificationIntent::try_from(request).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let request: NotificationIntentRequest =
            serde_json::from_str(r#"{"action":"mark_all_read"}"#).unwrap();
        assert_eq!(
            NotificationIntent::try_from(request).unwrap(),
            NotificationIntent::MarkAllRead
        );

        let request: NotificationIntentRequest =
            serde_json::from_str(r#"{"action":"toggle_read","id":4}"#).unwrap();
        assert_eq!(
            NotificationIntent::try_from(request).unwrap(),
            NotificationIntent::ToggleRead(4)
        );
    }
}
