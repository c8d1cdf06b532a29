//! Swipe Row DOM Bindings
//!
//! Touch handlers that drive a `SwipeRow` held in a signal.

use leptos::prelude::*;

use crate::swipe::{SwipeConfig, SwipeRest, SwipeRow, TapOutcome};

const SNAP_TRANSITION: &str = "transform 0.2s cubic-bezier(0.2, 0.8, 0.2, 1)";

/// Swipe state for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    row: RwSignal<SwipeRow>,
}

pub fn create_swipe_signals(config: SwipeConfig) -> SwipeSignals {
    SwipeSignals {
        row: RwSignal::new(SwipeRow::new(config)),
    }
}

impl SwipeSignals {
    pub fn offset(&self) -> f64 {
        self.row.with(|r| r.offset())
    }

    pub fn is_open(&self) -> bool {
        self.row.with(|r| r.is_open())
    }

    pub fn close(&self) {
        self.row.update(|r| r.close());
    }

    /// Inline style for the sliding content layer. Vertical panning stays
    /// with the page; horizontal movement belongs to the row.
    pub fn content_style(&self) -> String {
        self.row.with(|r| {
            let transition = if r.is_tracking() { "none" } else { SNAP_TRANSITION };
            format!(
                "transform: translateX({}px); transition: {}; touch-action: pan-y;",
                r.offset(),
                transition
            )
        })
    }

    /// Resolve a tap on the content layer
    pub fn tap(&self) -> TapOutcome {
        self.row.try_update(|r| r.tap()).unwrap_or(TapOutcome::Primary)
    }
}

fn first_touch(ev: &web_sys::TouchEvent) -> Option<(f64, f64)> {
    let touch = ev.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

pub fn make_on_touchstart(swipe: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            swipe.row.update(|r| r.touch_start(x, y));
        }
    }
}

pub fn make_on_touchmove(swipe: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            let owned = swipe
                .row
                .try_maybe_update(|r| {
                    let owned = r.touch_move(x, y);
                    (owned, owned)
                })
                .unwrap_or(false);
            if owned {
                ev.prevent_default();
            }
        }
    }
}

/// `on_rest` runs when a tracked swipe settles
pub fn make_on_touchend<F>(swipe: SwipeSignals, on_rest: F) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    F: Fn(SwipeRest) + Copy + 'static,
{
    move |_ev: web_sys::TouchEvent| {
        if let Some(Some(rest)) = swipe.row.try_update(|r| r.touch_end()) {
            on_rest(rest);
        }
    }
}

/// Same settling as `make_on_touchend`, for a touch the browser took over
pub fn make_on_touchcancel<F>(swipe: SwipeSignals, on_rest: F) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    F: Fn(SwipeRest) + Copy + 'static,
{
    move |_ev: web_sys::TouchEvent| {
        if let Some(Some(rest)) = swipe.row.try_update(|r| r.touch_cancel()) {
            on_rest(rest);
        }
    }
}

/// Keeps at most one row open at a time.
/// Rows are independent unless they register with a coordinator.
#[derive(Clone, Copy)]
pub struct SwipeCoordinator {
    open_row: RwSignal<Option<String>>,
}

impl Default for SwipeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeCoordinator {
    pub fn new() -> Self {
        Self {
            open_row: RwSignal::new(None),
        }
    }

    pub fn opened(&self, id: &str) {
        self.open_row.set(Some(id.to_string()));
    }

    /// Close `swipe` whenever a different row opens
    pub fn watch(&self, id: String, swipe: SwipeSignals) {
        let open_row = self.open_row;
        Effect::new(move |_| {
            let open = open_row.get();
            if open.as_deref() != Some(id.as_str()) && swipe.row.with_untracked(|r| r.is_open()) {
                swipe.close();
            }
        });
    }
}
