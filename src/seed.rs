//! Seed data used when nothing has been stored yet

use crate::models::{
    ActivityDetails, DiningDetails, Item, ItemDetails, ItineraryState, Period, ShoppingAlbum, ShoppingItem, TodoItem,
    TodosState,
};

fn todo(id: &str, text: &str) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        text: text.to_string(),
        completed: false,
    }
}

pub fn initial_todos() -> TodosState {
    TodosState {
        tasks: vec![todo("1", "下載離線地圖"), todo("2", "確認網卡/漫遊"), todo("3", "線上預辦登機")],
        carry_on: vec![todo("4", "護照"), todo("5", "行動電源"), todo("6", "充電線")],
        checked: vec![todo("7", "換洗衣物"), todo("8", "盥洗用品")],
    }
}

struct Seed<'a> {
    id: &'a str,
    date: &'a str,
    title: &'a str,
    link: Option<&'a str>,
    notes: Option<&'a str>,
}

impl Seed<'_> {
    fn activity(self, period: Period, time: &str, transport: &str) -> Item {
        self.into_item(ItemDetails::Activity(ActivityDetails {
            period,
            time: time.to_string(),
            transport: Some(transport.to_string()),
        }))
    }

    fn dining(self) -> Item {
        self.into_item(ItemDetails::Dining(DiningDetails::new(false, None)))
    }

    fn into_item(self, details: ItemDetails) -> Item {
        Item {
            id: self.id.to_string(),
            date: self.date.to_string(),
            title: self.title.to_string(),
            link: self.link.map(str::to_string),
            notes: self.notes.map(str::to_string),
            details,
        }
    }
}

pub fn initial_itinerary() -> ItineraryState {
    let day1 = "2024-12-12";
    let day2 = "2024-12-13";
    let mut itinerary = ItineraryState::new();
    itinerary.insert(
        day1.to_string(),
        vec![
            Seed {
                id: "i1",
                date: day1,
                title: "桃園機場集合",
                link: Some("https://maps.google.com/?q=Taoyuan+Airport"),
                notes: Some("第二航廈"),
            }
            .activity(Period::Morning, "09:00", "機捷"),
            Seed {
                id: "i2",
                date: day1,
                title: "抵達目的地",
                link: None,
                notes: Some("記得領行李"),
            }
            .activity(Period::Afternoon, "14:00", "飛機"),
            Seed {
                id: "i3",
                date: day1,
                title: "飯店 Check-in",
                link: Some("https://maps.google.com"),
                notes: None,
            }
            .activity(Period::Evening, "18:00", "計程車"),
            Seed {
                id: "d1",
                date: day1,
                title: "機場美食街",
                link: Some(""),
                notes: None,
            }
            .dining(),
        ],
    );
    itinerary.insert(
        day2.to_string(),
        vec![Seed {
            id: "i4",
            date: day2,
            title: "市區觀光",
            link: None,
            notes: Some("買一日券"),
        }
        .activity(Period::Morning, "10:00", "地鐵")],
    );
    itinerary
}

fn album(id: &str, name: &str, items: Vec<ShoppingItem>) -> ShoppingAlbum {
    ShoppingAlbum {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

pub fn initial_shopping() -> Vec<ShoppingAlbum> {
    vec![
        album(
            "album-1",
            "無印良品",
            vec![
                ShoppingItem {
                    id: "item-1".to_string(),
                    name: "咖哩速食包".to_string(),
                    image_url: Some(
                        "https://images.unsplash.com/photo-1596561234479-5808892d77d1?auto=format&fit=crop&q=80&w=300"
                            .to_string(),
                    ),
                    checked: false,
                },
                ShoppingItem {
                    id: "item-2".to_string(),
                    name: "筆記本".to_string(),
                    image_url: None,
                    checked: false,
                },
            ],
        ),
        album("album-2", "3COINS", vec![]),
        album("album-3", "大創", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{categorize, Bucket};

    #[test]
    fn test_seed_itinerary_buckets() {
        let itinerary = initial_itinerary();
        let day1 = &itinerary["2024-12-12"];
        let buckets = categorize(day1);
        for bucket in Bucket::ALL {
            assert_eq!(buckets.get(bucket).len(), 1);
        }
        assert!(day1.iter().all(|i| i.date == "2024-12-12"));
    }

    #[test]
    fn test_seed_ids_unique() {
        let todos = initial_todos();
        let mut ids: Vec<&str> = todos
            .tasks
            .iter()
            .chain(&todos.carry_on)
            .chain(&todos.checked)
            .map(|t| t.id.as_str())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(initial_shopping().len(), 3);
    }
}
