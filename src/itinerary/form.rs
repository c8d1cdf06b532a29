//! Item Form Editor
//!
//! Raw field values of the add/edit modal and their conversion into an
//! `Item`. The modal keeps an `ItemForm` in a signal and binds each input
//! to one field.

use serde::{Deserialize, Serialize};

use super::day_list;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{new_id, ActivityDetails, ClockTime, DiningDetails, Item, ItemDetails, ItemKind, Period};

pub const DEFAULT_TIME: &str = "09:00";

/// Where an activity's period comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// The period selector decides
    #[default]
    Explicit,
    /// Derived from the entered time
    FromTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemForm {
    /// Set while editing an existing item
    pub editing_id: Option<String>,
    editing_date: Option<String>,
    pub kind: ItemKind,
    pub title: String,
    pub link: String,
    pub notes: String,
    pub time: String,
    pub period: Period,
    pub transport: String,
    pub is_reserved: bool,
    pub reservation_time: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            editing_date: None,
            kind: ItemKind::Activity,
            title: String::new(),
            link: String::new(),
            notes: String::new(),
            time: DEFAULT_TIME.to_string(),
            period: Period::Morning,
            transport: String::new(),
            is_reserved: false,
            reservation_time: String::new(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clock(s: &str, field: &str) -> PlannerResult<ClockTime> {
    ClockTime::parse(s).ok_or_else(|| PlannerError::Validation(format!("{} must be HH:MM", field)))
}

impl ItemForm {
    /// Blank form for a new item
    pub fn create() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing item
    pub fn edit(item: &Item) -> Self {
        let mut form = Self {
            editing_id: Some(item.id.clone()),
            editing_date: Some(item.date.clone()),
            kind: item.kind(),
            title: item.title.clone(),
            link: item.link.clone().unwrap_or_default(),
            notes: item.notes.clone().unwrap_or_default(),
            ..Self::default()
        };
        match &item.details {
            ItemDetails::Activity(activity) => {
                if !activity.time.is_empty() {
                    form.time = activity.time.clone();
                }
                form.period = activity.period;
                form.transport = activity.transport.clone().unwrap_or_default();
            }
            ItemDetails::Dining(dining) => {
                form.is_reserved = dining.is_reserved();
                form.reservation_time = dining.reservation_time().unwrap_or_default().to_string();
            }
        }
        form
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Validate and produce the item. New items get a fresh id and `date`;
    /// edited items keep their id and date.
    pub fn build(&self, date: &str, mode: PeriodMode) -> PlannerResult<Item> {
        let title = non_empty(&self.title).ok_or_else(|| PlannerError::Validation("title is required".into()))?;

        let details = match self.kind {
            ItemKind::Activity => {
                let time = clock(&self.time, "time")?;
                let period = match mode {
                    PeriodMode::Explicit => self.period,
                    PeriodMode::FromTime => Period::from_time(time),
                };
                ItemDetails::Activity(ActivityDetails {
                    period,
                    time: time.to_string(),
                    transport: non_empty(&self.transport),
                })
            }
            ItemKind::Dining => {
                let reservation_time = if self.is_reserved {
                    Some(clock(&self.reservation_time, "reservation time")?.to_string())
                } else {
                    None
                };
                ItemDetails::Dining(DiningDetails::new(self.is_reserved, reservation_time))
            }
        };

        Ok(Item {
            id: self.editing_id.clone().unwrap_or_else(|| new_id("item")),
            date: self.editing_date.clone().unwrap_or_else(|| date.to_string()),
            title,
            link: non_empty(&self.link),
            notes: non_empty(&self.notes),
            details,
        })
    }

    /// Build and merge into the day list: edits replace by id, new items append
    pub fn apply(&self, items: &[Item], date: &str, mode: PeriodMode) -> PlannerResult<Vec<Item>> {
        let item = self.build(date, mode)?;
        Ok(if self.is_editing() {
            day_list::replace_by_id(items, item)
        } else {
            day_list::append(items, item)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::test_support::{activity, dining};

    fn dining_form(title: &str, reserved: bool, time: &str) -> ItemForm {
        ItemForm {
            kind: ItemKind::Dining,
            title: title.to_string(),
            is_reserved: reserved,
            reservation_time: time.to_string(),
            ..ItemForm::create()
        }
    }

    #[test]
    fn test_defaults() {
        let form = ItemForm::create();
        assert_eq!(form.time, "09:00");
        assert_eq!(form.period, Period::Morning);
        assert!(!form.is_reserved);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_create_activity() {
        let form = ItemForm {
            title: "  Dazaifu  ".to_string(),
            time: "10:30".to_string(),
            period: Period::Afternoon,
            transport: "Train".to_string(),
            link: "   ".to_string(),
            ..ItemForm::create()
        };
        let item = form.build("2024-12-13", PeriodMode::Explicit).unwrap();
        assert!(item.id.starts_with("item-"));
        assert_eq!(item.date, "2024-12-13");
        assert_eq!(item.title, "Dazaifu");
        assert_eq!(item.link, None);
        assert_eq!(item.notes, None);
        assert_eq!(item.period(), Some(Period::Afternoon));
        let ItemDetails::Activity(activity) = &item.details else {
            panic!("expected activity");
        };
        assert_eq!(activity.time, "10:30");
        assert_eq!(activity.transport.as_deref(), Some("Train"));
    }

    #[test]
    fn test_period_from_time() {
        let form = ItemForm {
            title: "Yatai".to_string(),
            time: "19:15".to_string(),
            period: Period::Morning,
            ..ItemForm::create()
        };
        let item = form.build("2024-12-13", PeriodMode::FromTime).unwrap();
        assert_eq!(item.period(), Some(Period::Evening));
    }

    #[test]
    fn test_blank_title_rejected() {
        let form = ItemForm {
            title: "   ".to_string(),
            ..ItemForm::create()
        };
        assert!(matches!(form.build("2024-12-13", PeriodMode::Explicit), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_bad_time_rejected() {
        let form = ItemForm {
            title: "Tower".to_string(),
            time: "25:00".to_string(),
            ..ItemForm::create()
        };
        assert!(form.build("2024-12-13", PeriodMode::Explicit).is_err());
    }

    #[test]
    fn test_reservation_gating() {
        let unreserved = dining_form("Ramen", false, "12:00").build("2024-12-12", PeriodMode::Explicit).unwrap();
        let ItemDetails::Dining(details) = &unreserved.details else {
            panic!("expected dining");
        };
        assert!(!details.is_reserved());
        assert_eq!(details.reservation_time(), None);
        let value = serde_json::to_value(&unreserved).unwrap();
        assert!(value.get("reservationTime").is_none());
        assert!(value.get("period").is_none());

        let reserved = dining_form("Yakiniku", true, "19:30").build("2024-12-12", PeriodMode::Explicit).unwrap();
        let ItemDetails::Dining(details) = &reserved.details else {
            panic!("expected dining");
        };
        assert_eq!(details.reservation_time(), Some("19:30"));
    }

    #[test]
    fn test_reserved_requires_time() {
        let form = dining_form("Sushi", true, "");
        assert!(matches!(form.build("2024-12-12", PeriodMode::Explicit), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_edit_round_trip_keeps_identity() {
        let mut original = activity("a1", Period::Evening, "18:00");
        original.date = "2024-12-14".to_string();
        original.notes = Some("bring cash".to_string());

        let mut form = ItemForm::edit(&original);
        assert!(form.is_editing());
        assert_eq!(form.period, Period::Evening);
        assert_eq!(form.notes, "bring cash");
        form.title = "Canal City".to_string();

        let item = form.build("2024-12-16", PeriodMode::Explicit).unwrap();
        assert_eq!(item.id, "a1");
        assert_eq!(item.date, "2024-12-14");
        assert_eq!(item.title, "Canal City");
        assert_eq!(item.notes.as_deref(), Some("bring cash"));
    }

    #[test]
    fn test_edit_dining_prefills_reservation() {
        let mut original = dining("d1");
        original.details = ItemDetails::Dining(DiningDetails::new(true, Some("20:00".to_string())));
        let form = ItemForm::edit(&original);
        assert_eq!(form.kind, ItemKind::Dining);
        assert!(form.is_reserved);
        assert_eq!(form.reservation_time, "20:00");
        assert_eq!(form.time, DEFAULT_TIME);
    }

    #[test]
    fn test_apply_create_appends_and_edit_replaces() {
        let items = vec![activity("a1", Period::Morning, "09:00"), dining("d1")];

        let created = ItemForm {
            title: "Ohori Park".to_string(),
            ..ItemForm::create()
        }
        .apply(&items, "2024-12-12", PeriodMode::Explicit)
        .unwrap();
        assert_eq!(created.len(), 3);
        assert_eq!(created[2].title, "Ohori Park");

        let mut form = ItemForm::edit(&items[0]);
        form.title = "Airport".to_string();
        let edited = form.apply(&items, "2024-12-12", PeriodMode::Explicit).unwrap();
        assert_eq!(edited.len(), 2);
        assert_eq!(edited[0].id, "a1");
        assert_eq!(edited[0].title, "Airport");
    }
}
