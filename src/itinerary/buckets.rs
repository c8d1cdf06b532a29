//! Bucket Categorizer
//!
//! Splits a day's flat item list into the four display buckets.
//! Buckets are a stable filter over the flat order; nothing is sorted.

use crate::models::{Item, Period};

/// Display bucket, also used as the drop-zone container id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    Morning,
    Afternoon,
    Evening,
    Dining,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Morning, Bucket::Afternoon, Bucket::Evening, Bucket::Dining];

    /// Container id used on drop zones
    pub fn id(&self) -> &'static str {
        match self {
            Bucket::Morning => "morning",
            Bucket::Afternoon => "afternoon",
            Bucket::Evening => "evening",
            Bucket::Dining => "dining",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "dining" => Some(Bucket::Dining),
            other => Period::parse(other).map(Bucket::from),
        }
    }

    /// Bucket an item is displayed in
    pub fn of(item: &Item) -> Self {
        item.period().map(Bucket::from).unwrap_or(Bucket::Dining)
    }

    pub fn period(&self) -> Option<Period> {
        match self {
            Bucket::Morning => Some(Period::Morning),
            Bucket::Afternoon => Some(Period::Afternoon),
            Bucket::Evening => Some(Period::Evening),
            Bucket::Dining => None,
        }
    }

    pub fn is_time_of_day(&self) -> bool {
        self.period().is_some()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Dining => "餐廳 / 美食",
            _ => self.period().map(|p| p.label()).unwrap_or_default(),
        }
    }

    /// Placeholder shown while the bucket is empty
    pub fn empty_hint(&self) -> &'static str {
        match self {
            Bucket::Dining => "尚無餐廳",
            _ => "拖曳至此新增行程",
        }
    }
}

impl From<Period> for Bucket {
    fn from(period: Period) -> Self {
        match period {
            Period::Morning => Bucket::Morning,
            Period::Afternoon => Bucket::Afternoon,
            Period::Evening => Bucket::Evening,
        }
    }
}

/// The four ordered views of one day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buckets {
    pub morning: Vec<Item>,
    pub afternoon: Vec<Item>,
    pub evening: Vec<Item>,
    pub dining: Vec<Item>,
}

impl Buckets {
    pub fn get(&self, bucket: Bucket) -> &[Item] {
        match bucket {
            Bucket::Morning => &self.morning,
            Bucket::Afternoon => &self.afternoon,
            Bucket::Evening => &self.evening,
            Bucket::Dining => &self.dining,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<Item> {
        match bucket {
            Bucket::Morning => &mut self.morning,
            Bucket::Afternoon => &mut self.afternoon,
            Bucket::Evening => &mut self.evening,
            Bucket::Dining => &mut self.dining,
        }
    }

    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition items into buckets in one pass, keeping list order
pub fn categorize(items: &[Item]) -> Buckets {
    let mut buckets = Buckets::default();
    for item in items {
        buckets.get_mut(Bucket::of(item)).push(item.clone());
    }
    buckets
}
