//! Drag-and-Drop DOM Bindings
//!
//! Pointer-event driven drag-and-drop for Leptos.
//! Targets are found by hit-testing the point under the pointer for
//! `data-dnd-item` / `data-dnd-zone` attributes, so touch input (which keeps
//! pointer capture on the pressed element) works the same as a mouse.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::{DragOutcome, DragPhase, DragSession, DropTarget};

/// Attribute carrying an item id on draggable/droppable items
pub const ITEM_ATTR: &str = "data-dnd-item";
/// Attribute carrying a container id on drop zones
pub const ZONE_ATTR: &str = "data-dnd-zone";

/// How long a click after a drag is swallowed
const CLICK_SUPPRESS_MS: u32 = 100;

/// Notifications emitted while a gesture runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DndEvent {
    Started(String),
    /// The target under the pointer changed
    Hovered { dragged: String, target: DropTarget },
    Dropped { dragged: String, target: DropTarget },
    Cancelled(String),
}

/// Keyboard reorder step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStep {
    Up,
    Down,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    session: RwSignal<DragSession>,
    drag_just_ended: RwSignal<bool>,
}

pub fn create_dnd_signals(activation_distance: i32) -> DndSignals {
    DndSignals {
        session: RwSignal::new(DragSession::new(activation_distance)),
        drag_just_ended: RwSignal::new(false),
    }
}

impl DndSignals {
    /// Id of the dragged item (tracked)
    pub fn dragging_id(&self) -> Option<String> {
        self.session.with(|s| s.dragging_id().map(str::to_owned))
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.session.with(|s| s.dragging_id() == Some(id))
    }

    pub fn is_any_dragging(&self) -> bool {
        self.session.with(|s| s.is_dragging())
    }

    pub fn is_target(&self, target: &DropTarget) -> bool {
        self.session.with(|s| s.target() == Some(target))
    }

    /// True for a short moment after a drag ends; click handlers use it to
    /// ignore the click that the browser fires on release.
    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended.get_untracked()
    }
}

/// End drag operation
fn end_drag(dnd: DndSignals) {
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    Timeout::new(CLICK_SUPPRESS_MS, move || {
        clear.try_set(false);
    })
    .forget();
}

/// Create pointerdown handler for a drag handle.
/// Records a pending drag; it only activates after the pointer moves.
pub fn make_on_pointerdown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let (x, y) = (ev.client_x(), ev.client_y());
        let id = item_id.clone();
        dnd.session.try_maybe_update(|s| (s.press(id, x, y), ()));
    }
}

/// Map ArrowUp/ArrowDown to a reorder step
pub fn key_step(ev: &web_sys::KeyboardEvent) -> Option<KeyStep> {
    match ev.key().as_str() {
        "ArrowUp" => Some(KeyStep::Up),
        "ArrowDown" => Some(KeyStep::Down),
        _ => None,
    }
}

/// Find the item or zone under a viewport point
fn hit_test(x: i32, y: i32) -> Option<DropTarget> {
    let doc = web_sys::window()?.document()?;
    let el = doc.element_from_point(x as f32, y as f32)?;
    let hit = el.closest(&format!("[{}], [{}]", ITEM_ATTR, ZONE_ATTR)).ok()??;
    if let Some(id) = hit.get_attribute(ITEM_ATTR) {
        return Some(DropTarget::Item(id));
    }
    hit.get_attribute(ZONE_ATTR).map(DropTarget::Zone)
}

/// Bind window-level pointer and keyboard listeners for the current owner.
/// Listeners are removed when the owner is cleaned up.
pub fn bind_dnd_listeners<F>(dnd: DndSignals, on_event: F)
where
    F: Fn(DndEvent) + Clone + 'static,
{
    let on_move = on_event.clone();
    let move_handle = window_event_listener(ev::pointermove, move |ev: web_sys::PointerEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        let started = dnd
            .session
            .try_maybe_update(|s| {
                let started = s.pointer_move(x, y);
                (started.is_some(), started)
            })
            .flatten();
        if let Some(id) = started {
            log::debug!("[DND] Drag started: {}", id);
            on_move(DndEvent::Started(id));
        }

        let Some(dragged) = dnd.session.with_untracked(|s| s.dragging_id().map(str::to_owned)) else {
            return;
        };
        ev.prevent_default();

        let target = hit_test(x, y);
        let changed = dnd
            .session
            .try_maybe_update(|s| {
                let changed = s.hover(target.clone());
                (changed, changed)
            })
            .unwrap_or(false);
        if let (true, Some(target)) = (changed, target) {
            on_move(DndEvent::Hovered { dragged, target });
        }
    });

    let on_up = on_event.clone();
    let up_handle = window_event_listener(ev::pointerup, move |_ev: web_sys::PointerEvent| {
        let outcome = dnd.session.try_maybe_update(|s| {
            let live = *s.phase() != DragPhase::Idle;
            (live, s.release())
        });
        match outcome {
            Some(DragOutcome::Dropped { dragged, target }) => {
                log::debug!("[DND] Drop: dragged={}, target={:?}", dragged, target);
                end_drag(dnd);
                on_up(DndEvent::Dropped { dragged, target });
            }
            Some(DragOutcome::Cancelled { dragged }) => {
                log::debug!("[DND] Released outside any target: {}", dragged);
                end_drag(dnd);
                on_up(DndEvent::Cancelled(dragged));
            }
            // Not dragging - the click event fires naturally on the element
            _ => {}
        }
    });

    let on_abort = on_event.clone();
    let abort = move || {
        let cancelled = dnd.session.try_maybe_update(|s| {
            let live = *s.phase() != DragPhase::Idle;
            (live, s.cancel())
        });
        if let Some(Some(dragged)) = cancelled {
            end_drag(dnd);
            on_abort(DndEvent::Cancelled(dragged));
        }
    };
    let abort_on_key = abort.clone();
    let cancel_handle = window_event_listener(ev::pointercancel, move |_ev: web_sys::PointerEvent| abort());
    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            abort_on_key();
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
        key_handle.remove();
    });
}
