//! Whole-list updates for one day's items

use crate::models::Item;

pub fn find<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|i| i.id == id)
}

/// Replace the item with the same id, keeping its position
pub fn replace_by_id(items: &[Item], updated: Item) -> Vec<Item> {
    items
        .iter()
        .map(|item| if item.id == updated.id { updated.clone() } else { item.clone() })
        .collect()
}

pub fn remove_by_id(items: &[Item], id: &str) -> Vec<Item> {
    items.iter().filter(|i| i.id != id).cloned().collect()
}

pub fn append(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::test_support::{activity, dining};
    use crate::models::Period;

    #[test]
    fn test_replace_keeps_position() {
        let items = vec![activity("a", Period::Morning, "09:00"), dining("d"), activity("b", Period::Evening, "19:00")];
        let mut edited = items[1].clone();
        edited.title = "Yatai".to_string();

        let next = replace_by_id(&items, edited);
        assert_eq!(next.len(), 3);
        assert_eq!(next[1].title, "Yatai");
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_replace_unknown_id_is_unchanged() {
        let items = vec![dining("d")];
        assert_eq!(replace_by_id(&items, dining("x")), items);
    }

    #[test]
    fn test_remove_and_append() {
        let items = vec![activity("a", Period::Morning, "09:00"), dining("d")];
        let removed = remove_by_id(&items, "a");
        assert_eq!(removed.len(), 1);
        assert!(find(&removed, "a").is_none());

        let appended = append(&removed, activity("c", Period::Afternoon, "15:00"));
        assert_eq!(appended.last().map(|i| i.id.as_str()), Some("c"));
    }
}
