use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    notification_filter::{filter_notifications, NotificationQuery},
    notification_models::{NotificationRecord, NotificationType},
    notification_repository::NotificationRepository,
};

/// A user action on the notification page. Dispatching an intent only ever
/// calls one of the three repository operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIntent {
    /// Row click. Marks the record read if it is still unread.
    Open(u32),
    /// Check icon. Always a plain mark-read, even on a read record.
    ToggleRead(u32),
    Delete(u32),
    MarkAllRead,
}

/// State change produced by a dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationChange {
    MarkedRead { notification_id: u32 },
    Deleted { notification_id: u32 },
    AllMarkedRead { updated: usize },
}

impl NotificationIntent {
    /// The record the intent targets, if any.
    pub fn target(&self) -> Option<u32> {
        match *self {
            NotificationIntent::Open(id)
            | NotificationIntent::ToggleRead(id)
            | NotificationIntent::Delete(id) => Some(id),
            NotificationIntent::MarkAllRead => None,
        }
    }

    /// Applies the intent. `None` means the collection did not change.
    pub fn apply(self, repo: &mut NotificationRepository) -> Option<NotificationChange> {
        match self {
            NotificationIntent::Open(id) | NotificationIntent::ToggleRead(id) => repo
                .mark_as_read(id)
                .then_some(NotificationChange::MarkedRead { notification_id: id }),
            NotificationIntent::Delete(id) => repo
                .delete(id)
                .then_some(NotificationChange::Deleted { notification_id: id }),
            NotificationIntent::MarkAllRead => match repo.mark_all_as_read() {
                0 => None,
                updated => Some(NotificationChange::AllMarkedRead { updated }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NotificationItem {
    #[serde(flatten)]
    pub record: NotificationRecord,
    pub category_name: String,
    pub icon: String,
}

impl From<&NotificationRecord> for NotificationItem {
    fn from(record: &NotificationRecord) -> Self {
        Self {
            record: record.clone(),
            category_name: record.kind.display_name().to_string(),
            icon: record.kind.icon().to_string(),
        }
    }
}

/// What the notification page shows for one (collection, query) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NotificationView {
    pub items: Vec<NotificationItem>,
    /// Counted over the full collection, not over `items`.
    pub unread_count: usize,
    pub total: usize,
    pub category: String,
    pub search: String,
    /// True when the filter left nothing to show ("no results" state).
    pub is_empty: bool,
    /// Whether the "mark all read" action should be offered.
    pub can_mark_all_read: bool,
}

impl NotificationView {
    pub fn build(repo: &NotificationRepository, query: &NotificationQuery) -> Self {
        let items: Vec<NotificationItem> = filter_notifications(repo.all(), query)
            .map(NotificationItem::from)
            .collect();
        let unread_count = repo.unread_count();

        Self {
            is_empty: items.is_empty(),
            items,
            unread_count,
            total: repo.len(),
            category: query.category.as_str().to_string(),
            search: query.search().to_string(),
            can_mark_all_read: unread_count > 0,
        }
    }
}

/// One entry of the category picker, `all` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

pub fn category_options() -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        id: "all".to_string(),
        name: "全部通知".to_string(),
        icon: None,
    })
    .chain(NotificationType::ALL.iter().map(|kind| CategoryOption {
        id: kind.as_str().to_string(),
        name: kind.display_name().to_string(),
        icon: Some(kind.icon().to_string()),
    }))
    .collect()
}
