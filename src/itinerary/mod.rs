//! Itinerary Logic
//!
//! Pure list operations behind the itinerary page: bucket projection,
//! drag/keyboard reordering, the add/edit form and whole-list updates.

pub mod buckets;
pub mod day_list;
pub mod form;
pub mod reorder;

pub use buckets::{categorize, Bucket, Buckets};
pub use form::{ItemForm, PeriodMode};
pub use reorder::{keyboard_step, CancelPolicy, ItineraryDrag};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{ActivityDetails, DiningDetails, Item, ItemDetails, Period};

    pub fn activity(id: &str, period: Period, time: &str) -> Item {
        Item {
            id: id.to_string(),
            date: "2024-12-12".to_string(),
            title: format!("Activity {}", id),
            link: None,
            notes: None,
            details: ItemDetails::Activity(ActivityDetails {
                period,
                time: time.to_string(),
                transport: Some("Walk".to_string()),
            }),
        }
    }

    pub fn dining(id: &str) -> Item {
        Item {
            id: id.to_string(),
            date: "2024-12-12".to_string(),
            title: format!("Dining {}", id),
            link: None,
            notes: None,
            details: ItemDetails::Dining(DiningDetails::new(false, None)),
        }
    }
}
