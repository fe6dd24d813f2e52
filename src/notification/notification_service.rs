use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    notification_dto::{DispatchResponse, MarkAllReadResponse, NotificationMutationResponse},
    notification_filter::NotificationQuery,
    notification_repository::NotificationRepository,
    notification_view::{NotificationChange, NotificationIntent, NotificationView},
};
use crate::error::{AppError, Result};

/// Published on the broadcast channel after every state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub event_id: Uuid,
    #[serde(flatten)]
    pub change: NotificationChange,
    pub unread_count: usize,
    pub at: DateTime<Utc>,
}

/// Service layer for the notification center.
///
/// Every operation takes the repository lock once, so each one runs as a
/// single serialized step against the collection.
#[derive(Clone)]
pub struct NotificationService {
    repo: Arc<RwLock<NotificationRepository>>,
    events: broadcast::Sender<NotificationEvent>,
    strict_ids: bool,
}

impl NotificationService {
    pub fn new(
        repo: NotificationRepository,
        events: broadcast::Sender<NotificationEvent>,
        strict_ids: bool,
    ) -> Self {
        Self {
            repo: Arc::new(RwLock::new(repo)),
            events,
            strict_ids,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.events.subscribe()
    }

    pub async fn list(&self, query: &NotificationQuery) -> NotificationView {
        let repo = self.repo.read().await;
        NotificationView::build(&repo, query)
    }

    pub async fn unread_count(&self) -> usize {
        self.repo.read().await.unread_count()
    }

    pub async fn mark_as_read(&self, id: u32) -> Result<NotificationMutationResponse> {
        let dispatched = self.dispatch(NotificationIntent::ToggleRead(id)).await?;
        Ok(NotificationMutationResponse {
            id,
            changed: dispatched.changed,
            unread_count: dispatched.unread_count,
        })
    }

    pub async fn mark_all_as_read(&self) -> Result<MarkAllReadResponse> {
        let dispatched = self.dispatch(NotificationIntent::MarkAllRead).await?;
        let updated = match dispatched.change {
            Some(NotificationChange::AllMarkedRead { updated }) => updated,
            _ => 0,
        };
        Ok(MarkAllReadResponse {
            updated,
            unread_count: dispatched.unread_count,
        })
    }

    pub async fn delete(&self, id: u32) -> Result<NotificationMutationResponse> {
        let dispatched = self.dispatch(NotificationIntent::Delete(id)).await?;
        Ok(NotificationMutationResponse {
            id,
            changed: dispatched.changed,
            unread_count: dispatched.unread_count,
        })
    }

    /// Applies a user intent. Unknown ids are a no-op unless strict id
    /// checking is enabled, in which case they are `NotFound`.
    pub async fn dispatch(&self, intent: NotificationIntent) -> Result<DispatchResponse> {
        let mut repo = self.repo.write().await;

        if let Some(id) = intent.target() {
            if repo.find_by_id(id).is_none() {
                info!(notification_id = id, ?intent, "Intent targets unknown notification");
                if self.strict_ids {
                    return Err(AppError::NotFound("Notification not found".to_string()));
                }
            }
        }

        let change = intent.apply(&mut repo);
        let unread_count = repo.unread_count();

        debug!(?intent, changed = change.is_some(), unread_count, "Dispatched notification intent");

        // Published under the write guard so events leave in commit order
        if let Some(change) = change.clone() {
            let event = NotificationEvent {
                event_id: Uuid::new_v4(),
                change,
                unread_count,
                at: Utc::now(),
            };
            // No subscribers is fine
            let _ = self.events.send(event);
        }

        Ok(DispatchResponse {
            changed: change.is_some(),
            change,
            unread_count,
        })
    }
}
