//! Drag Session
//!
//! Browser-independent lifecycle of a single pointer drag:
//! `Idle -> Pending -> Dragging -> Idle`.

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Pointer is over a draggable item (by item id)
    Item(String),
    /// Pointer is over a container's drop zone (by container id)
    Zone(String),
}

/// Current phase of the drag lifecycle
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer pressed on an item but not moved far enough yet
    Pending { id: String, start_x: i32, start_y: i32 },
    /// Drag in progress, with the target currently under the pointer
    Dragging { id: String, target: Option<DropTarget> },
}

/// Result of releasing the pointer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released over a target
    Dropped { dragged: String, target: DropTarget },
    /// Released while dragging but outside any target
    Cancelled { dragged: String },
    /// Released before the drag activated; the element's click fires normally
    Click,
    /// Nothing was pressed
    Ignored,
}

/// Default movement in pixels before a press turns into a drag
pub const DEFAULT_ACTIVATION_DISTANCE: i32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    phase: DragPhase,
    activation_distance: i32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragSession {
    pub fn new(activation_distance: i32) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation_distance: activation_distance.max(0),
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Id of the item being dragged (only once activated)
    pub fn dragging_id(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&DropTarget> {
        match &self.phase {
            DragPhase::Dragging { target, .. } => target.as_ref(),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Record a press on an item. Only accepted from `Idle`, so a second
    /// gesture can never start while one is live.
    pub fn press(&mut self, id: impl Into<String>, x: i32, y: i32) -> bool {
        if self.phase != DragPhase::Idle {
            return false;
        }
        self.phase = DragPhase::Pending {
            id: id.into(),
            start_x: x,
            start_y: y,
        };
        true
    }

    /// Feed a pointer position. Returns the item id when this movement
    /// activates the drag.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> Option<String> {
        let DragPhase::Pending { id, start_x, start_y } = &self.phase else {
            return None;
        };
        let dx = i64::from(x - start_x);
        let dy = i64::from(y - start_y);
        let limit = i64::from(self.activation_distance);
        if dx * dx + dy * dy <= limit * limit {
            return None;
        }
        let id = id.clone();
        self.phase = DragPhase::Dragging {
            id: id.clone(),
            target: None,
        };
        Some(id)
    }

    /// Update the target under the pointer. Returns true when it changed.
    pub fn hover(&mut self, next: Option<DropTarget>) -> bool {
        match &mut self.phase {
            DragPhase::Dragging { target, .. } if *target != next => {
                *target = next;
                true
            }
            _ => false,
        }
    }

    /// Release the pointer and return to `Idle`.
    pub fn release(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::Ignored,
            DragPhase::Pending { .. } => DragOutcome::Click,
            DragPhase::Dragging { id, target: Some(target) } => DragOutcome::Dropped {
                dragged: id,
                target,
            },
            DragPhase::Dragging { id, target: None } => DragOutcome::Cancelled { dragged: id },
        }
    }

    /// Abort the gesture (e.g. Escape). Returns the dragged id if a drag was live.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(id: &str) -> DragSession {
        let mut session = DragSession::new(8);
        session.press(id, 0, 0);
        session.pointer_move(20, 0);
        session
    }

    #[test]
    fn test_small_movement_stays_pending() {
        let mut session = DragSession::new(8);
        assert!(session.press("a", 10, 10));
        assert_eq!(session.pointer_move(15, 15), None);
        assert!(!session.is_dragging());
        assert_eq!(session.release(), DragOutcome::Click);
        assert_eq!(session.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_activation_past_distance() {
        let mut session = DragSession::new(8);
        session.press("a", 0, 0);
        assert_eq!(session.pointer_move(0, 9), Some("a".to_string()));
        assert_eq!(session.dragging_id(), Some("a"));
        // Further movement does not re-activate
        assert_eq!(session.pointer_move(0, 40), None);
    }

    #[test]
    fn test_press_only_from_idle() {
        let mut session = dragging("a");
        assert!(!session.press("b", 0, 0));
        assert_eq!(session.dragging_id(), Some("a"));
    }

    #[test]
    fn test_hover_reports_changes_only() {
        let mut session = dragging("a");
        assert!(session.hover(Some(DropTarget::Item("b".into()))));
        assert!(!session.hover(Some(DropTarget::Item("b".into()))));
        assert!(session.hover(Some(DropTarget::Zone("evening".into()))));
        assert_eq!(session.target(), Some(&DropTarget::Zone("evening".into())));
    }

    #[test]
    fn test_hover_ignored_when_not_dragging() {
        let mut session = DragSession::new(8);
        assert!(!session.hover(Some(DropTarget::Item("b".into()))));
        session.press("a", 0, 0);
        assert!(!session.hover(Some(DropTarget::Item("b".into()))));
    }

    #[test]
    fn test_release_over_target_drops() {
        let mut session = dragging("a");
        session.hover(Some(DropTarget::Item("b".into())));
        assert_eq!(
            session.release(),
            DragOutcome::Dropped {
                dragged: "a".into(),
                target: DropTarget::Item("b".into())
            }
        );
        assert_eq!(session.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut session = dragging("a");
        session.hover(Some(DropTarget::Item("b".into())));
        session.hover(None);
        assert_eq!(session.release(), DragOutcome::Cancelled { dragged: "a".into() });
    }

    #[test]
    fn test_escape_cancel() {
        let mut session = dragging("a");
        assert_eq!(session.cancel(), Some("a".to_string()));
        assert_eq!(session.release(), DragOutcome::Ignored);
    }
}
