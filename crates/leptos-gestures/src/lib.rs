//! Leptos Gesture Utilities
//!
//! Drag-and-drop and swipe-to-reveal for Leptos.
//! `session` and `swipe` hold the state machines and have no DOM dependency;
//! `dnd` and `swipe_row` bind them to browser events.

mod dnd;
mod session;
mod swipe;
mod swipe_row;

pub use dnd::{
    bind_dnd_listeners, create_dnd_signals, key_step, make_on_pointerdown, DndEvent, DndSignals,
    KeyStep, ITEM_ATTR, ZONE_ATTR,
};
pub use session::{DragOutcome, DragPhase, DragSession, DropTarget, DEFAULT_ACTIVATION_DISTANCE};
pub use swipe::{SwipeConfig, SwipeRest, SwipeRow, TapOutcome};
pub use swipe_row::{
    create_swipe_signals, make_on_touchcancel, make_on_touchend, make_on_touchmove, make_on_touchstart,
    SwipeCoordinator, SwipeSignals,
};
