use super::equipment_models::{Equipment, EquipmentStatus, EquipmentSummary, EquipmentType};
use crate::farm::farm_repository::percent;

/// Battery level below which a device is reported as low.
pub const LOW_BATTERY_THRESHOLD: u8 = 20;

#[derive(Debug, Clone)]
pub struct EquipmentRepository {
    devices: Vec<Equipment>,
}

impl EquipmentRepository {
    pub fn new(devices: Vec<Equipment>) -> Self {
        Self { devices }
    }

    pub fn seeded() -> Self {
        let device = |id, name: &str, status, location: &str, battery, last_active: &str, alerts, kind| {
            Equipment {
                id,
                name: name.to_string(),
                status,
                location: location.to_string(),
                battery,
                last_active: last_active.to_string(),
                alerts,
                kind,
            }
        };

        Self::new(vec![
            device(1, "智能灌溉系统", EquipmentStatus::Online, "A区", 85, "刚刚", 0, EquipmentType::Irrigation),
            device(2, "环境监测站", EquipmentStatus::Online, "B区", 92, "5分钟前", 0, EquipmentType::Monitoring),
            device(3, "土壤传感器", EquipmentStatus::Warning, "C区", 15, "1小时前", 1, EquipmentType::Sensor),
            device(4, "无人机巡检", EquipmentStatus::Offline, "仓库", 0, "昨天", 2, EquipmentType::Drone),
            device(5, "智能灌溉系统", EquipmentStatus::Online, "D区", 78, "10分钟前", 0, EquipmentType::Irrigation),
            device(6, "环境监测站", EquipmentStatus::Online, "E区", 65, "30分钟前", 0, EquipmentType::Monitoring),
        ])
    }

    /// Devices in seed order, optionally restricted to one status.
    pub fn list(&self, status: Option<EquipmentStatus>) -> Vec<Equipment> {
        self.devices
            .iter()
            .filter(|device| status.map_or(true, |status| device.status == status))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Equipment> {
        self.devices.iter().find(|device| device.id == id)
    }

    pub fn summary(&self) -> EquipmentSummary {
        let count = |status: EquipmentStatus| self.devices.iter().filter(|d| d.status == status).count();
        let online = count(EquipmentStatus::Online);

        EquipmentSummary {
            total: self.devices.len(),
            online,
            warning: count(EquipmentStatus::Warning),
            offline: count(EquipmentStatus::Offline),
            open_alerts: self.devices.iter().map(|d| d.alerts).sum(),
            low_battery: self
                .devices
                .iter()
                .filter(|d| d.battery < LOW_BATTERY_THRESHOLD)
                .map(|d| d.id)
                .collect(),
            online_percent: percent(online as u32, self.devices.len() as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters_by_status_in_order() {
        let repo = EquipmentRepository::seeded();
        let online: Vec<u32> = repo
            .list(Some(EquipmentStatus::Online))
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(online, vec![1, 2, 5, 6]);
        assert_eq!(repo.list(None).len(), 6);
    }

    #[test]
    fn test_summary() {
        let summary = EquipmentRepository::seeded().summary();
        assert_eq!(summary.total, 6);
        assert_eq!(summary.online, 4);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.offline, 1);
        assert_eq!(summary.open_alerts, 3);
        assert_eq!(summary.low_battery, vec![3, 4]);
        assert_eq!(summary.online_percent, 66.7);
    }

    #[test]
    fn test_summary_of_empty_fleet() {
        let summary = EquipmentRepository::new(Vec::new()).summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.online_percent, 0.0);
        assert!(summary.low_battery.is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let repo = EquipmentRepository::seeded();
        assert_eq!(repo.find_by_id(4).unwrap().location, "仓库");
        assert!(repo.find_by_id(7).is_none());
    }
}
