//! Itinerary Drag Controller
//!
//! Domain rules for dragging items between buckets and reordering the flat
//! day list. Every operation returns a replacement list (or `None` when
//! nothing changes); the caller hands it to the list owner.

use leptos_gestures::{DropTarget, KeyStep};
use serde::{Deserialize, Serialize};

use super::buckets::Bucket;
use crate::models::{Item, ItemDetails};

/// What happens to an optimistic period change when a drag is cancelled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelPolicy {
    /// Leave the item in the bucket it was last hovered over
    #[default]
    Keep,
    /// Restore the period captured when the drag started
    Revert,
}

/// Gesture captured at drag start
#[derive(Clone, Debug, PartialEq)]
struct DragState {
    dragged_id: String,
    snapshot: Item,
}

/// `Idle -> Dragging -> Idle` controller for one day's list
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ItineraryDrag {
    state: Option<DragState>,
    cancel_policy: CancelPolicy,
}

impl ItineraryDrag {
    pub fn new(cancel_policy: CancelPolicy) -> Self {
        Self {
            state: None,
            cancel_policy,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_none()
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.dragged_id.as_str())
    }

    /// Item as it was when the drag started
    pub fn snapshot(&self) -> Option<&Item> {
        self.state.as_ref().map(|s| &s.snapshot)
    }

    /// Begin dragging `id`. Only possible while idle and for a known item.
    pub fn start(&mut self, items: &[Item], id: &str) -> bool {
        if self.state.is_some() {
            return false;
        }
        let Some(item) = items.iter().find(|i| i.id == id) else {
            return false;
        };
        self.state = Some(DragState {
            dragged_id: id.to_string(),
            snapshot: item.clone(),
        });
        true
    }

    /// Pointer moved over `target`: preview a period change if the target is
    /// another time-of-day bucket.
    pub fn hover(&self, items: &[Item], target: &DropTarget) -> Option<Vec<Item>> {
        let dragged = self.dragged_id()?;
        let bucket = resolve_container(items, target)?;
        recategorize(items, dragged, bucket)
    }

    /// Release over `target`. Always returns the controller to idle.
    pub fn drop(&mut self, items: &[Item], target: &DropTarget) -> Option<Vec<Item>> {
        let state = self.state.take()?;
        let dragged = state.dragged_id.as_str();

        let recategorized = resolve_container(items, target).and_then(|b| recategorize(items, dragged, b));
        let base = recategorized.as_deref().unwrap_or(items);

        let moved = match target {
            DropTarget::Item(over) if over != dragged => {
                let from = index_of(base, dragged)?;
                let to = index_of(base, over)?;
                (from != to).then(|| move_item(base, from, to))
            }
            _ => None,
        };
        moved.or(recategorized)
    }

    /// Abandon the drag without reordering
    pub fn cancel(&mut self, items: &[Item]) -> Option<Vec<Item>> {
        let state = self.state.take()?;
        match self.cancel_policy {
            CancelPolicy::Keep => None,
            CancelPolicy::Revert => {
                let period = state.snapshot.period()?;
                recategorize(items, &state.dragged_id, Bucket::from(period))
            }
        }
    }
}

/// Container a drop target belongs to: a zone names its bucket directly,
/// an item resolves to its own bucket.
pub fn resolve_container(items: &[Item], target: &DropTarget) -> Option<Bucket> {
    match target {
        DropTarget::Zone(id) => Bucket::parse(id),
        DropTarget::Item(id) => items.iter().find(|i| &i.id == id).map(Bucket::of),
    }
}

/// Move an activity into another time-of-day bucket by changing only its
/// period. Dining items and the dining bucket never take part.
pub fn recategorize(items: &[Item], id: &str, bucket: Bucket) -> Option<Vec<Item>> {
    let period = bucket.period()?;
    let current = items.iter().find(|i| i.id == id)?;
    if current.period()? == period {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| match &item.details {
                ItemDetails::Activity(activity) if item.id == id => {
                    let mut activity = activity.clone();
                    activity.period = period;
                    Item {
                        details: ItemDetails::Activity(activity),
                        ..item.clone()
                    }
                }
                _ => item.clone(),
            })
            .collect(),
    )
}

pub fn index_of(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|i| i.id == id)
}

/// Single-element array move: remove at `from`, insert at `to`
pub fn move_item(items: &[Item], from: usize, to: usize) -> Vec<Item> {
    let mut next = items.to_vec();
    if from >= next.len() || to >= next.len() {
        return next;
    }
    let item = next.remove(from);
    next.insert(to, item);
    next
}

/// Keyboard reorder: swap places with the neighbouring sibling in the same
/// bucket. At a bucket edge an activity steps into the adjacent time-of-day
/// bucket, landing next to that bucket's nearest item.
pub fn keyboard_step(items: &[Item], id: &str, step: KeyStep) -> Option<Vec<Item>> {
    let index = index_of(items, id)?;
    let bucket = Bucket::of(&items[index]);
    let siblings: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| Bucket::of(item) == bucket)
        .map(|(n, _)| n)
        .collect();
    let position = siblings.iter().position(|&n| n == index)?;

    let neighbour = match step {
        KeyStep::Up => position.checked_sub(1).map(|p| siblings[p]),
        KeyStep::Down => siblings.get(position + 1).copied(),
    };
    if let Some(neighbour) = neighbour {
        return Some(move_item(items, index, neighbour));
    }

    let next_bucket = match (bucket, step) {
        (Bucket::Afternoon, KeyStep::Up) => Bucket::Morning,
        (Bucket::Evening, KeyStep::Up) => Bucket::Afternoon,
        (Bucket::Morning, KeyStep::Down) => Bucket::Afternoon,
        (Bucket::Afternoon, KeyStep::Down) => Bucket::Evening,
        _ => return None,
    };
    let recategorized = recategorize(items, id, next_bucket)?;

    // Entering from above lands first, entering from below lands last
    let anchor = match step {
        KeyStep::Down => recategorized.iter().find(|i| i.id != id && Bucket::of(i) == next_bucket),
        KeyStep::Up => recategorized.iter().rev().find(|i| i.id != id && Bucket::of(i) == next_bucket),
    };
    let Some(anchor) = anchor.map(|i| i.id.clone()) else {
        return Some(recategorized);
    };
    Some(place_beside(&recategorized, id, &anchor, step == KeyStep::Down))
}

/// Reinsert `id` directly before (or after) `anchor`
fn place_beside(items: &[Item], id: &str, anchor: &str, before: bool) -> Vec<Item> {
    let mut next = items.to_vec();
    let Some(from) = index_of(&next, id) else {
        return next;
    };
    let item = next.remove(from);
    let at = match index_of(&next, anchor) {
        Some(a) if before => a,
        Some(a) => a + 1,
        None => from.min(next.len()),
    };
    next.insert(at, item);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::test_support::{activity, dining};
    use crate::models::Period;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn day() -> Vec<Item> {
        vec![
            activity("m1", Period::Morning, "09:00"),
            activity("a1", Period::Afternoon, "14:00"),
            activity("m2", Period::Morning, "10:00"),
            dining("d1"),
            activity("e1", Period::Evening, "19:00"),
        ]
    }

    fn started(items: &[Item], id: &str, policy: CancelPolicy) -> ItineraryDrag {
        let mut drag = ItineraryDrag::new(policy);
        assert!(drag.start(items, id));
        drag
    }

    #[test]
    fn test_start_only_from_idle() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Keep);
        assert!(!drag.start(&items, "a1"));
        assert_eq!(drag.dragged_id(), Some("m1"));
        assert_eq!(drag.snapshot().map(|i| i.id.as_str()), Some("m1"));
    }

    #[test]
    fn test_start_unknown_item() {
        let mut drag = ItineraryDrag::default();
        assert!(!drag.start(&day(), "nope"));
        assert!(drag.is_idle());
    }

    #[test]
    fn test_resolve_container() {
        let items = day();
        assert_eq!(resolve_container(&items, &DropTarget::Zone("evening".into())), Some(Bucket::Evening));
        assert_eq!(resolve_container(&items, &DropTarget::Item("a1".into())), Some(Bucket::Afternoon));
        assert_eq!(resolve_container(&items, &DropTarget::Item("d1".into())), Some(Bucket::Dining));
        assert_eq!(resolve_container(&items, &DropTarget::Item("gone".into())), None);
    }

    #[test]
    fn test_hover_changes_only_period() {
        let items = day();
        let drag = started(&items, "m1", CancelPolicy::Keep);
        let next = drag.hover(&items, &DropTarget::Item("e1".into())).unwrap();

        assert_eq!(ids(&next), ids(&items));
        let before = &items[0];
        let after = &next[0];
        assert_eq!(after.period(), Some(Period::Evening));
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.kind(), before.kind());
        let (ItemDetails::Activity(b), ItemDetails::Activity(a)) = (&before.details, &after.details) else {
            panic!("expected activities");
        };
        assert_eq!(a.time, b.time);
        assert_eq!(a.transport, b.transport);
        assert_eq!(&next[1..], &items[1..]);
    }

    #[test]
    fn test_hover_same_bucket_is_noop() {
        let items = day();
        let drag = started(&items, "m1", CancelPolicy::Keep);
        assert_eq!(drag.hover(&items, &DropTarget::Item("m2".into())), None);
        assert_eq!(drag.hover(&items, &DropTarget::Zone("morning".into())), None);
    }

    #[test]
    fn test_activity_never_becomes_dining() {
        let items = day();
        let drag = started(&items, "m1", CancelPolicy::Keep);
        assert_eq!(drag.hover(&items, &DropTarget::Zone("dining".into())), None);
        assert_eq!(drag.hover(&items, &DropTarget::Item("d1".into())), None);
    }

    #[test]
    fn test_dining_never_becomes_activity() {
        let items = day();
        let drag = started(&items, "d1", CancelPolicy::Keep);
        assert_eq!(drag.hover(&items, &DropTarget::Zone("morning".into())), None);
        assert_eq!(drag.hover(&items, &DropTarget::Item("a1".into())), None);
    }

    #[test]
    fn test_hover_without_drag_is_noop() {
        let drag = ItineraryDrag::default();
        assert_eq!(drag.hover(&day(), &DropTarget::Zone("evening".into())), None);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Keep);
        assert_eq!(drag.drop(&items, &DropTarget::Item("m1".into())), None);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_moves_to_target_index() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Keep);
        let next = drag.drop(&items, &DropTarget::Item("m2".into())).unwrap();
        assert_eq!(ids(&next), vec!["a1", "m2", "m1", "d1", "e1"]);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_preserves_hover_recategorization() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Keep);
        let hovered = drag.hover(&items, &DropTarget::Item("e1".into())).unwrap();
        let next = drag.drop(&hovered, &DropTarget::Item("e1".into())).unwrap();
        assert_eq!(ids(&next), vec!["a1", "m2", "d1", "e1", "m1"]);
        assert_eq!(next[4].period(), Some(Period::Evening));
    }

    #[test]
    fn test_drop_on_zone_keeps_position() {
        let items = day();
        let mut drag = started(&items, "m2", CancelPolicy::Keep);
        let hovered = drag.hover(&items, &DropTarget::Zone("evening".into())).unwrap();
        // Already recategorized by hover: nothing further to commit
        assert_eq!(drag.drop(&hovered, &DropTarget::Zone("evening".into())), None);
        assert_eq!(ids(&hovered), ids(&items));
    }

    #[test]
    fn test_drop_on_zone_without_hover_still_recategorizes() {
        let items = day();
        let mut drag = started(&items, "m2", CancelPolicy::Keep);
        let next = drag.drop(&items, &DropTarget::Zone("afternoon".into())).unwrap();
        assert_eq!(next[2].period(), Some(Period::Afternoon));
        assert_eq!(ids(&next), ids(&items));
    }

    #[test]
    fn test_move_invariant() {
        let items = day();
        for from in 0..items.len() {
            for to in 0..items.len() {
                if from == to {
                    continue;
                }
                let moved = move_item(&items, from, to);
                assert_eq!(moved.len(), items.len());
                assert_eq!(moved[to].id, items[from].id);
                assert_eq!(moved.iter().filter(|i| i.id == items[from].id).count(), 1);

                let rest_before: Vec<_> = items.iter().filter(|i| i.id != items[from].id).collect();
                let rest_after: Vec<_> = moved.iter().filter(|i| i.id != items[from].id).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn test_move_out_of_bounds_is_unchanged() {
        let items = day();
        assert_eq!(move_item(&items, 0, 99), items);
    }

    #[test]
    fn test_cancel_keep_leaves_hovered_period() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Keep);
        let hovered = drag.hover(&items, &DropTarget::Zone("evening".into())).unwrap();
        assert_eq!(drag.cancel(&hovered), None);
        assert!(drag.is_idle());
        // The optimistic change is what the owner already holds
        assert_eq!(hovered[0].period(), Some(Period::Evening));
    }

    #[test]
    fn test_cancel_revert_restores_snapshot_period() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Revert);
        let hovered = drag.hover(&items, &DropTarget::Zone("evening".into())).unwrap();
        let reverted = drag.cancel(&hovered).unwrap();
        assert_eq!(reverted, items);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_cancel_revert_without_change_is_noop() {
        let items = day();
        let mut drag = started(&items, "m1", CancelPolicy::Revert);
        assert_eq!(drag.cancel(&items), None);
    }

    #[test]
    fn test_keyboard_step_within_bucket() {
        let items = day();
        let next = keyboard_step(&items, "m1", KeyStep::Down).unwrap();
        assert_eq!(ids(&next), vec!["a1", "m2", "m1", "d1", "e1"]);
        let back = keyboard_step(&next, "m1", KeyStep::Up).unwrap();
        assert_eq!(ids(&back), vec!["a1", "m1", "m2", "d1", "e1"]);
    }

    #[test]
    fn test_keyboard_step_crosses_into_next_bucket_first() {
        let items = day();
        let next = keyboard_step(&items, "m2", KeyStep::Down).unwrap();
        assert_eq!(next.iter().find(|i| i.id == "m2").unwrap().period(), Some(Period::Afternoon));
        assert_eq!(ids(&next), vec!["m1", "m2", "a1", "d1", "e1"]);
    }

    #[test]
    fn test_keyboard_step_crosses_into_previous_bucket_last() {
        let items = day();
        let next = keyboard_step(&items, "e1", KeyStep::Up).unwrap();
        assert_eq!(next.iter().find(|i| i.id == "e1").unwrap().period(), Some(Period::Afternoon));
        assert_eq!(ids(&next), vec!["m1", "a1", "e1", "m2", "d1"]);
    }

    #[test]
    fn test_keyboard_step_stops_at_outer_edges() {
        let items = day();
        assert_eq!(keyboard_step(&items, "m1", KeyStep::Up), None);
        assert_eq!(keyboard_step(&items, "e1", KeyStep::Down), None);
        assert_eq!(keyboard_step(&items, "d1", KeyStep::Up), None);
    }
}
