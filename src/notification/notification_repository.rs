use super::notification_models::{NotificationRecord, NotificationType};

/// Authoritative in-memory notification collection.
///
/// The three mutating operations never fail: unknown ids are tolerated and
/// reported back as "nothing changed". Insertion order is preserved and is
/// the order every listing uses.
#[derive(Debug, Clone, Default)]
pub struct NotificationRepository {
    records: Vec<NotificationRecord>,
}

impl NotificationRepository {
    /// Builds a repository from records, dropping later duplicates of an id.
    pub fn new(records: Vec<NotificationRecord>) -> Self {
        let mut unique: Vec<NotificationRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|existing| existing.id == record.id) {
                tracing::warn!(notification_id = record.id, "Dropping duplicate notification id");
                continue;
            }
            unique.push(record);
        }
        Self { records: unique }
    }

    /// The fixed set the console starts from. A restart resets to this.
    pub fn seeded() -> Self {
        let mut records = vec![
            NotificationRecord::new(
                1,
                "系统更新通知",
                "智慧农业助手已更新至最新版本v2.3.0，新增气候韧性分析功能",
                "今天 08:30",
                NotificationType::System,
            ),
            NotificationRecord::new(
                2,
                "灌溉提醒",
                "A区小麦田今日需要灌溉，建议在上午10点前完成",
                "昨天 15:45",
                NotificationType::Reminder,
            ),
            NotificationRecord::new(
                3,
                "异常天气预警",
                "未来24小时将有强降雨，预计降雨量50-80mm，请提前做好排水准备",
                "昨天 09:12",
                NotificationType::Warning,
            ),
            NotificationRecord::new(
                4,
                "土壤监测报告",
                "D区土壤湿度低于阈值，已自动调整灌溉计划",
                "2天前",
                NotificationType::Report,
            ),
            NotificationRecord::new(
                5,
                "设备维护提醒",
                "智能灌溉系统过滤器需要清洁，请安排维护人员处理",
                "3天前",
                NotificationType::Maintenance,
            ),
        ];
        records[3].read = true;
        records[4].read = true;

        Self::new(records)
    }

    pub fn all(&self) -> &[NotificationRecord] {
        &self.records
    }

    pub fn find_by_id(&self, id: u32) -> Option<&NotificationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|record| !record.read).count()
    }

    /// Returns true only when an unread record flipped to read.
    pub fn mark_as_read(&mut self, id: u32) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) if !record.read => {
                record.read = true;
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!(notification_id = id, "mark_as_read on unknown id");
                false
            }
        }
    }

    /// Returns how many records were unread before the call.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|record| !record.read) {
            record.read = true;
            updated += 1;
        }
        updated
    }

    /// Removes the record permanently. Returns false if the id was absent.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if !removed {
            tracing::debug!(notification_id = id, "delete on unknown id");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(repo: &NotificationRepository) -> Vec<u32> {
        repo.all().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_seed_has_three_unread() {
        let repo = NotificationRepository::seeded();
        assert_eq!(repo.len(), 5);
        assert_eq!(repo.unread_count(), 3);
        assert_eq!(ids(&repo), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mark_all_as_read_on_seed() {
        let mut repo = NotificationRepository::seeded();
        assert_eq!(repo.mark_all_as_read(), 3);
        assert_eq!(repo.unread_count(), 0);
        assert!(repo.all().iter().all(|r| r.read));
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn test_mark_all_as_read_is_idempotent() {
        let mut once = NotificationRepository::seeded();
        once.mark_all_as_read();
        let mut twice = once.clone();
        assert_eq!(twice.mark_all_as_read(), 0);
        assert_eq!(once.all(), twice.all());
    }

    #[test]
    fn test_mark_all_as_read_on_empty_collection() {
        let mut repo = NotificationRepository::default();
        assert_eq!(repo.mark_all_as_read(), 0);
        assert_eq!(repo.len(), 0);
    }

    #[test]
    fn test_mark_as_read_is_idempotent() {
        let mut repo = NotificationRepository::seeded();
        assert!(repo.mark_as_read(2));
        let after_once = repo.clone();
        assert!(!repo.mark_as_read(2));
        assert_eq!(repo.all(), after_once.all());
        assert_eq!(repo.unread_count(), 2);
    }

    #[test]
    fn test_mark_as_read_never_unmarks() {
        let mut repo = NotificationRepository::seeded();
        assert!(!repo.mark_as_read(4));
        assert!(repo.find_by_id(4).unwrap().read);
    }

    #[test]
    fn test_unknown_id_leaves_collection_unchanged() {
        let mut repo = NotificationRepository::seeded();
        let before = repo.clone();

        assert!(!repo.mark_as_read(42));
        assert!(!repo.delete(42));

        assert_eq!(repo.all(), before.all());
    }

    #[test]
    fn test_delete_unread_record() {
        let mut repo = NotificationRepository::seeded();
        assert!(repo.delete(3));
        assert_eq!(repo.len(), 4);
        assert!(repo.find_by_id(3).is_none());
        assert_eq!(repo.unread_count(), 2);
        assert_eq!(ids(&repo), vec![1, 2, 4, 5]);

        // gone for good
        assert!(!repo.delete(3));
        assert!(!repo.mark_as_read(3));
    }

    #[test]
    fn test_delete_read_record_keeps_unread_count() {
        let mut repo = NotificationRepository::seeded();
        assert!(repo.delete(5));
        assert_eq!(repo.unread_count(), 3);
    }

    #[test]
    fn test_unread_count_tracks_every_operation() {
        let mut repo = NotificationRepository::seeded();
        let expected = |repo: &NotificationRepository| {
            repo.all().iter().filter(|r| !r.read).count()
        };

        repo.mark_as_read(1);
        assert_eq!(repo.unread_count(), expected(&repo));
        repo.delete(2);
        assert_eq!(repo.unread_count(), expected(&repo));
        repo.mark_all_as_read();
        assert_eq!(repo.unread_count(), expected(&repo));
        repo.delete(99);
        assert_eq!(repo.unread_count(), expected(&repo));
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let repo = NotificationRepository::new(vec![
            NotificationRecord::new(1, "a", "a", "now", NotificationType::System),
            NotificationRecord::new(1, "b", "b", "now", NotificationType::Report),
            NotificationRecord::new(2, "c", "c", "now", NotificationType::Warning),
        ]);
        assert_eq!(ids(&repo), vec![1, 2]);
        assert_eq!(repo.find_by_id(1).unwrap().title, "a");
    }
}
