use std::str::FromStr;

use super::notification_models::{NotificationRecord, NotificationType};
use crate::error::AppError;

/// Category bucket selected in the console. `All` disables the type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NotificationType),
}

impl CategoryFilter {
    pub fn matches(&self, kind: NotificationType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => *expected == kind,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub category: CategoryFilter,
    /// Lowercased once here so matching does not refold per record.
    needle: String,
}

impl NotificationQuery {
    pub fn new(category: CategoryFilter, search: &str) -> Self {
        Self {
            category,
            needle: search.to_lowercase(),
        }
    }

    pub fn search(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &NotificationRecord) -> bool {
        self.category.matches(record.kind) && self.matches_search(record)
    }

    // Literal substring match after Unicode lowercasing; no width folding.
    fn matches_search(&self, record: &NotificationRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.title.to_lowercase().contains(&self.needle)
            || record.message.to_lowercase().contains(&self.needle)
    }
}

/// Stable filter over the full collection. Cheap to call again whenever the
/// collection or the query changes; nothing is cached between calls.
pub fn filter_notifications<'a>(
    records: &'a [NotificationRecord],
    query: &'a NotificationQuery,
) -> impl Iterator<Item = &'a NotificationRecord> + Clone + 'a {
    records.iter().filter(move |record| query.matches(record))
}
