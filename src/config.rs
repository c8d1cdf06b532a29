//! Planner Configuration
//!
//! Loaded from the bundled `planner.toml`. Every section and field has a
//! default so a partial file still works.

use leptos_gestures::{SwipeConfig, DEFAULT_ACTIVATION_DISTANCE};
use serde::{Deserialize, Serialize};

use crate::itinerary::{CancelPolicy, PeriodMode};

const BUNDLED: &str = include_str!("../planner.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub trip: TripConfig,
    pub storage: StorageConfig,
    pub backup: BackupConfig,
    pub drag: DragConfig,
    pub swipe: SwipeSettings,
    pub form: FormConfig,
    pub logging: LoggingConfig,
    pub shopping: ShoppingConfig,
}

/// One entry of the tab bar. Day tabs carry a date; the prep tab does not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub sub_label: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl TabConfig {
    fn new(id: &str, label: &str, sub_label: &str, date: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            sub_label: sub_label.to_string(),
            date: date.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TripConfig {
    pub title: String,
    pub version: String,
    pub tabs: Vec<TabConfig>,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            title: "艾瑪ㄉ福岡獨旅✨".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            tabs: vec![
                TabConfig::new("prep", "行前", "準備", None),
                TabConfig::new("day1", "12/12", "週五", Some("2024-12-12")),
                TabConfig::new("day2", "12/13", "週六", Some("2024-12-13")),
                TabConfig::new("day3", "12/14", "週日", Some("2024-12-14")),
                TabConfig::new("day4", "12/15", "週一", Some("2024-12-15")),
                TabConfig::new("day5", "12/16", "週二", Some("2024-12-16")),
            ],
        }
    }
}

impl TripConfig {
    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// First tab, shown on startup
    pub fn first_tab_id(&self) -> String {
        self.tabs.first().map(|t| t.id.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub todos_key: String,
    pub itinerary_key: String,
    pub shopping_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            todos_key: "lavender_todos".to_string(),
            itinerary_key: "lavender_itinerary".to_string(),
            shopping_key: "lavender_shopping".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackupConfig {
    pub app: String,
    pub file_prefix: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            app: "fukuoka-trip".to_string(),
            file_prefix: "fukuoka-backup".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DragConfig {
    pub activation_distance: i32,
    pub cancel_policy: CancelPolicy,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            cancel_policy: CancelPolicy::Keep,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub dead_zone: f64,
    pub max_offset: f64,
    pub snap_threshold: f64,
    pub tap_close_threshold: f64,
    pub card_reveal_width: f64,
    pub todo_reveal_width: f64,
    /// Close the previously open row when another opens
    pub single_open_row: bool,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        let base = SwipeConfig::default();
        Self {
            dead_zone: base.dead_zone,
            max_offset: base.max_offset,
            snap_threshold: base.snap_threshold,
            tap_close_threshold: base.tap_close_threshold,
            card_reveal_width: 80.0,
            todo_reveal_width: 70.0,
            single_open_row: false,
        }
    }
}

impl SwipeSettings {
    fn row(&self, reveal_width: f64) -> SwipeConfig {
        SwipeConfig {
            dead_zone: self.dead_zone,
            max_offset: self.max_offset,
            snap_threshold: self.snap_threshold,
            reveal_width,
            tap_close_threshold: self.tap_close_threshold,
        }
    }

    pub fn card(&self) -> SwipeConfig {
        self.row(self.card_reveal_width)
    }

    pub fn todo(&self) -> SwipeConfig {
        self.row(self.todo_reveal_width)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    pub period_mode: PeriodMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: 200,
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShoppingConfig {
    pub max_image_width: u32,
    pub jpeg_quality: f64,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            max_image_width: 800,
            jpeg_quality: 0.6,
        }
    }
}

impl PlannerConfig {
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// The `planner.toml` compiled into the app
    pub fn bundled() -> Result<Self, toml::de::Error> {
        Self::parse(BUNDLED)
    }
}
