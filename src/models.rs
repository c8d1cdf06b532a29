//! Planner Models
//!
//! Data structures persisted to local storage and written to backups.
//! Field names follow the stored JSON (camelCase, `type` tag on items).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fresh opaque id such as `item-6f1c...`
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Time-of-day bucket of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(Period::Morning),
            "afternoon" => Some(Period::Afternoon),
            "evening" => Some(Period::Evening),
            _ => None,
        }
    }

    /// Period a clock time falls in: before noon, before 18:00, or later
    pub fn from_time(time: ClockTime) -> Self {
        match time.hour() {
            h if h < 12 => Period::Morning,
            h if h < 18 => Period::Afternoon,
            _ => Period::Evening,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "上午",
            Period::Afternoon => "下午",
            Period::Evening => "晚上",
        }
    }
}

/// Item kind, stored as the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Activity,
    Dining,
}

/// A 24-hour `HH:MM` time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.trim().split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Fields only meaningful for activities
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ActivityDetails {
    #[serde(default)]
    pub period: Period,
    /// `HH:MM` as entered
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
}

/// Fields only meaningful for dining entries.
/// A reservation time only exists while the entry is reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "DiningWire", into = "DiningWire")]
pub struct DiningDetails {
    is_reserved: bool,
    reservation_time: Option<String>,
}

impl DiningDetails {
    pub fn new(is_reserved: bool, reservation_time: Option<String>) -> Self {
        Self {
            is_reserved,
            reservation_time: if is_reserved { reservation_time } else { None },
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.is_reserved
    }

    pub fn reservation_time(&self) -> Option<&str> {
        self.reservation_time.as_deref()
    }
}

/// Stored shape of `DiningDetails`
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiningWire {
    #[serde(default)]
    is_reserved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reservation_time: Option<String>,
}

impl From<DiningWire> for DiningDetails {
    fn from(wire: DiningWire) -> Self {
        DiningDetails::new(wire.is_reserved, wire.reservation_time)
    }
}

impl From<DiningDetails> for DiningWire {
    fn from(details: DiningDetails) -> Self {
        DiningWire {
            is_reserved: details.is_reserved,
            reservation_time: details.reservation_time,
        }
    }
}

/// Kind-specific payload, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemDetails {
    Activity(ActivityDetails),
    Dining(DiningDetails),
}

/// An itinerary entry for one day
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// `YYYY-MM-DD` of the day list holding the item
    #[serde(default)]
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self.details {
            ItemDetails::Activity(_) => ItemKind::Activity,
            ItemDetails::Dining(_) => ItemKind::Dining,
        }
    }

    /// Period of an activity; dining entries have none
    pub fn period(&self) -> Option<Period> {
        match &self.details {
            ItemDetails::Activity(activity) => Some(activity.period),
            ItemDetails::Dining(_) => None,
        }
    }

    pub fn is_dining(&self) -> bool {
        self.kind() == ItemKind::Dining
    }
}

/// Day lists keyed by `YYYY-MM-DD`
pub type ItineraryState = BTreeMap<String, Vec<Item>>;

/// A pre-trip checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Which pre-trip checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoCategory {
    Tasks,
    CarryOn,
    Checked,
}

impl TodoCategory {
    pub const ALL: [TodoCategory; 3] = [TodoCategory::Tasks, TodoCategory::CarryOn, TodoCategory::Checked];

    pub fn label(&self) -> &'static str {
        match self {
            TodoCategory::Tasks => "行前任務",
            TodoCategory::CarryOn => "隨身行李",
            TodoCategory::Checked => "托運行李",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TodosState {
    #[serde(default)]
    pub tasks: Vec<TodoItem>,
    #[serde(default)]
    pub carry_on: Vec<TodoItem>,
    #[serde(default)]
    pub checked: Vec<TodoItem>,
}

impl TodosState {
    pub fn list(&self, category: TodoCategory) -> &[TodoItem] {
        match category {
            TodoCategory::Tasks => &self.tasks,
            TodoCategory::CarryOn => &self.carry_on,
            TodoCategory::Checked => &self.checked,
        }
    }

    pub fn list_mut(&mut self, category: TodoCategory) -> &mut Vec<TodoItem> {
        match category {
            TodoCategory::Tasks => &mut self.tasks,
            TodoCategory::CarryOn => &mut self.carry_on,
            TodoCategory::Checked => &mut self.checked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}
