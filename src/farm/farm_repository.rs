use super::farm_models::{
    AdaptationMeasure, AlertType, ClimateEvent, ClimateResilience, CropHealthPoint, CropMetric,
    EnvironmentalReading, FarmActivity, FarmOverview, FieldAlert, HealthDistribution,
    SoilCondition, Trend,
};

/// Soil moisture below this percentage triggers the drought warning.
pub const DRY_SOIL_THRESHOLD: u8 = 40;

/// Share of `part` in `total` as a percentage with one decimal.
pub fn percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Read-only farm dashboard data, seeded at startup.
#[derive(Debug, Clone)]
pub struct FarmRepository {
    healthy_plants: u32,
    concern_plants: u32,
    unhealthy_plants: u32,
    yield_prediction: f64,
    alerts: Vec<FieldAlert>,
    crops: Vec<CropMetric>,
    soil: Vec<(String, f64, u8)>,
    activities: Vec<FarmActivity>,
    crop_health: Vec<CropHealthPoint>,
    environment: Vec<EnvironmentalReading>,
    climate: ClimateResilience,
}

impl FarmRepository {
    pub fn seeded() -> Self {
        let alert = |id, title: &str, kind, time: &str, description: &str, area: &str| FieldAlert {
            id,
            title: title.to_string(),
            kind,
            time: time.to_string(),
            description: description.to_string(),
            affected_area: area.to_string(),
        };
        let crop = |id, name: &str, quantity, health_rate, stage: &str, yield_prediction: &str| {
            CropMetric {
                id,
                name: name.to_string(),
                quantity,
                health_rate,
                growth_stage: stage.to_string(),
                yield_prediction: yield_prediction.to_string(),
            }
        };

        let activity = |id, title: &str, icon: &str, date: &str, description: &str, crop: &str, duration: &str| {
            FarmActivity {
                id,
                title: title.to_string(),
                icon: icon.to_string(),
                date: date.to_string(),
                description: description.to_string(),
                crop_type: crop.to_string(),
                duration: duration.to_string(),
            }
        };
        let reading = |time: &str, temperature, humidity, light, rainfall, cloud_cover| {
            EnvironmentalReading {
                time: time.to_string(),
                temperature,
                humidity,
                light,
                rainfall,
                cloud_cover,
            }
        };
        let climate_event = |year: &str, events, losses| ClimateEvent {
            year: year.to_string(),
            events,
            losses,
        };
        let measure = |name: &str, implementation, effectiveness| AdaptationMeasure {
            measure: name.to_string(),
            implementation,
            effectiveness,
        };

        Self {
            healthy_plants: 72839,
            concern_plants: 8946,
            unhealthy_plants: 2715,
            yield_prediction: 8.7,
            alerts: vec![
                alert(
                    1,
                    "强降雨预警",
                    AlertType::Warning,
                    "今天 14:30",
                    "未来24小时将有强降雨（预计降雨量50-80mm），可能导致农田积水，建议提前做好排水准备，检查排水系统。",
                    "所有区域",
                ),
                alert(
                    2,
                    "虫害监测",
                    AlertType::Alert,
                    "昨天 09:15",
                    "A区玉米发现蚜虫聚集（密度约15头/株），达到防治阈值，建议立即采取生物防治措施或喷洒低毒杀虫剂。",
                    "A区玉米田",
                ),
                alert(
                    3,
                    "干旱预警",
                    AlertType::Warning,
                    "3天前",
                    "D区土壤湿度低于40%，达到干旱预警阈值，启动二级抗旱响应，调整灌溉计划。",
                    "D区",
                ),
                alert(
                    4,
                    "低温预警",
                    AlertType::Warning,
                    "2天前",
                    "夜间温度将降至5℃以下，可能对幼苗造成影响，请采取覆盖保温措施。",
                    "B区、C区",
                ),
                alert(
                    5,
                    "大风预警",
                    AlertType::Alert,
                    "1天前",
                    "预计将出现6-7级大风，可能导致高秆作物倒伏，建议及时加固或提前收获成熟作物。",
                    "A区、E区",
                ),
            ],
            crops: vec![
                crop(1, "小麦", 12000, 92, "抽穗期", "520公斤/亩"),
                crop(2, "玉米", 8500, 88, "灌浆期", "580公斤/亩"),
                crop(3, "水稻", 15000, 90, "分蘖期", "650公斤/亩"),
                crop(4, "大豆", 6000, 76, "开花期", "180公斤/亩"),
                crop(5, "高粱", 4500, 85, "拔节期", "480公斤/亩"),
            ],
            soil: vec![
                ("A区".to_string(), 6.8, 65),
                ("B区".to_string(), 7.2, 58),
                ("C区".to_string(), 6.5, 72),
                ("D区".to_string(), 7.0, 38),
                ("E区".to_string(), 6.7, 52),
            ],
            activities: vec![
                activity(
                    1,
                    "精准施肥",
                    "fa-fertilizer",
                    "今天",
                    "对B区小麦进行了春季追肥，使用氮磷钾复合肥(N:P:K=20:10:15)，用量15kg/亩。",
                    "小麦",
                    "4小时",
                ),
                activity(
                    2,
                    "病虫害绿色防治",
                    "fa-bug",
                    "昨天",
                    "对A区玉米采用生物防治方法控制蚜虫，释放蚜茧蜂，密度为3000头/亩。",
                    "玉米",
                    "3小时",
                ),
                activity(
                    3,
                    "智能灌溉",
                    "fa-tint",
                    "2天前",
                    "根据土壤墒情数据，对C区水稻进行了智能滴灌，用水量30m³/亩，土壤湿度维持在65-70%。",
                    "水稻",
                    "5小时",
                ),
                activity(
                    4,
                    "气候适应性种植调整",
                    "fa-sun",
                    "3天前",
                    "根据长期天气预报，调整了E区种植结构，增加耐旱品种比例至30%。",
                    "多种作物",
                    "8小时",
                ),
            ],
            crop_health: [
                ("5/1", 85),
                ("5/8", 88),
                ("5/15", 86),
                ("5/22", 90),
                ("5/29", 91),
                ("6/5", 93),
                ("6/12", 92),
            ]
            .into_iter()
            .map(|(date, health_index)| CropHealthPoint {
                date: date.to_string(),
                health_index,
            })
            .collect(),
            environment: vec![
                reading("6:00", 18.0, 75, 2000, 0.0, 60),
                reading("9:00", 22.0, 65, 8000, 0.0, 40),
                reading("12:00", 28.0, 50, 15000, 0.0, 20),
                reading("15:00", 30.0, 45, 12000, 5.0, 70),
                reading("18:00", 24.0, 60, 3000, 12.0, 90),
                reading("21:00", 20.0, 70, 0, 3.0, 80),
            ],
            climate: ClimateResilience {
                resilience_score: 87,
                drought_resistance: 82,
                flood_resistance: 78,
                temperature_adaptation: 90,
                pest_resistance: 85,
                climate_events: vec![
                    climate_event("2020", 12, 15.2),
                    climate_event("2021", 15, 12.8),
                    climate_event("2022", 18, 9.5),
                    climate_event("2023", 20, 6.3),
                    climate_event("2024", 22, 4.1),
                ],
                adaptation_measures: vec![
                    measure("耐旱品种推广", 75, 85),
                    measure("节水灌溉系统", 90, 92),
                    measure("土壤改良", 65, 78),
                    measure("生态沟渠建设", 80, 88),
                    measure("病虫害绿色防控", 85, 90),
                ],
            },
        }
    }

    pub fn overview(&self) -> FarmOverview {
        let total = self.healthy_plants + self.concern_plants + self.unhealthy_plants;

        FarmOverview {
            total_crops: total,
            health_rate: percent(self.healthy_plants, total),
            alert_count: self.alerts.len(),
            yield_prediction: self.yield_prediction,
            crops_trend: Trend::Up,
            health_trend: Trend::Up,
            alert_trend: Trend::Down,
            yield_trend: Trend::Up,
            health_distribution: HealthDistribution {
                healthy: self.healthy_plants,
                concern: self.concern_plants,
                unhealthy: self.unhealthy_plants,
                healthy_percent: percent(self.healthy_plants, total),
                concern_percent: percent(self.concern_plants, total),
                unhealthy_percent: percent(self.unhealthy_plants, total),
            },
        }
    }

    pub fn crops(&self) -> &[CropMetric] {
        &self.crops
    }

    pub fn find_crop(&self, id: u32) -> Option<&CropMetric> {
        self.crops.iter().find(|crop| crop.id == id)
    }

    pub fn soil_conditions(&self) -> Vec<SoilCondition> {
        self.soil
            .iter()
            .map(|(area, ph, moisture)| SoilCondition {
                area: area.clone(),
                ph: *ph,
                moisture: *moisture,
                dry: *moisture < DRY_SOIL_THRESHOLD,
            })
            .collect()
    }

    pub fn alerts(&self, kind: Option<AlertType>) -> Vec<FieldAlert> {
        self.alerts
            .iter()
            .filter(|alert| kind.map_or(true, |kind| alert.kind == kind))
            .cloned()
            .collect()
    }

    /// Recent field work, newest first.
    pub fn activities(&self) -> &[FarmActivity] {
        &self.activities
    }

    pub fn crop_health(&self) -> &[CropHealthPoint] {
        &self.crop_health
    }

    /// Today's readings in time-of-day order.
    pub fn environment(&self) -> &[EnvironmentalReading] {
        &self.environment
    }

    pub fn climate_resilience(&self) -> &ClimateResilience {
        &self.climate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        assert_eq!(percent(72839, 84500), 86.2);
        assert_eq!(percent(8946, 84500), 10.6);
        assert_eq!(percent(2715, 84500), 3.2);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_overview_matches_seed() {
        let overview = FarmRepository::seeded().overview();
        assert_eq!(overview.total_crops, 84500);
        assert_eq!(overview.health_rate, 86.2);
        assert_eq!(overview.alert_count, 5);
        assert_eq!(overview.alert_trend, Trend::Down);
        assert_eq!(overview.health_distribution.unhealthy, 2715);
    }

    #[test]
    fn test_only_area_d_is_dry() {
        let dry: Vec<String> = FarmRepository::seeded()
            .soil_conditions()
            .into_iter()
            .filter(|soil| soil.dry)
            .map(|soil| soil.area)
            .collect();
        assert_eq!(dry, vec!["D区".to_string()]);
    }

    #[test]
    fn test_alert_filter_preserves_order() {
        let repo = FarmRepository::seeded();
        let ids: Vec<u32> = repo.alerts(Some(AlertType::Warning)).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(repo.alerts(None).len(), 5);
        assert!(repo.alerts(Some(AlertType::Info)).is_empty());
    }

    #[test]
    fn test_find_crop() {
        let repo = FarmRepository::seeded();
        assert_eq!(repo.find_crop(3).unwrap().name, "水稻");
        assert!(repo.find_crop(9).is_none());
        assert_eq!(repo.crops().len(), 5);
    }

    #[test]
    fn test_activities_in_seed_order() {
        let repo = FarmRepository::seeded();
        let titles: Vec<&str> = repo.activities().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["精准施肥", "病虫害绿色防治", "智能灌溉", "气候适应性种植调整"]);
        assert_eq!(repo.activities()[2].crop_type, "水稻");
        assert_eq!(repo.activities()[3].duration, "8小时");
    }

    #[test]
    fn test_crop_health_series() {
        let repo = FarmRepository::seeded();
        let series = repo.crop_health();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, "5/1");
        assert_eq!(series[0].health_index, 85);
        assert_eq!(series.iter().map(|p| p.health_index).max(), Some(93));
        assert_eq!(series.last().unwrap().date, "6/12");
    }

    #[test]
    fn test_environment_readings() {
        let repo = FarmRepository::seeded();
        let readings = repo.environment();
        let times: Vec<&str> = readings.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, vec!["6:00", "9:00", "12:00", "15:00", "18:00", "21:00"]);

        let total_rain: f64 = readings.iter().map(|r| r.rainfall).sum();
        assert_eq!(total_rain, 20.0);
        assert_eq!(readings[2].light, 15000);
        assert_eq!(readings[4].cloud_cover, 90);
    }

    #[test]
    fn test_climate_resilience() {
        let repo = FarmRepository::seeded();
        let climate = repo.climate_resilience();
        assert_eq!(climate.resilience_score, 87);
        assert_eq!(climate.flood_resistance, 78);

        let years: Vec<&str> = climate.climate_events.iter().map(|e| e.year.as_str()).collect();
        assert_eq!(years, vec!["2020", "2021", "2022", "2023", "2024"]);
        // losses fall every year while event counts rise
        assert!(climate
            .climate_events
            .windows(2)
            .all(|w| w[1].losses < w[0].losses && w[1].events > w[0].events));

        assert_eq!(climate.adaptation_measures.len(), 5);
        assert_eq!(climate.adaptation_measures[1].measure, "节水灌溉系统");
        assert_eq!(climate.adaptation_measures[1].effectiveness, 92);
    }
}
