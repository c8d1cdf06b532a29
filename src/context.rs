//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_gestures::SwipeCoordinator;

use crate::config::PlannerConfig;

/// Top-level page selected in the bottom navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Itinerary,
    Shopping,
    Settings,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub view_mode: ReadSignal<ViewMode>,
    /// Current page - write
    set_view_mode: WriteSignal<ViewMode>,
    /// Selected trip tab id - read
    pub active_tab: ReadSignal<String>,
    /// Selected trip tab id - write
    set_active_tab: WriteSignal<String>,
    /// Bumped by the header add button; the itinerary page opens its form
    pub add_request: ReadSignal<u32>,
    set_add_request: WriteSignal<u32>,
    /// Present when only one swipe row may be open at a time
    pub swipe_coordinator: Option<SwipeCoordinator>,
    config: StoredValue<PlannerConfig>,
}

impl AppContext {
    pub fn new(config: PlannerConfig) -> Self {
        let (view_mode, set_view_mode) = signal(ViewMode::Itinerary);
        let (active_tab, set_active_tab) = signal(config.trip.first_tab_id());
        let (add_request, set_add_request) = signal(0u32);
        let swipe_coordinator = config.swipe.single_open_row.then(SwipeCoordinator::new);
        Self {
            view_mode,
            set_view_mode,
            active_tab,
            set_active_tab,
            add_request,
            set_add_request,
            swipe_coordinator,
            config: StoredValue::new(config),
        }
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.set_view_mode.set(mode);
    }

    pub fn set_active_tab(&self, tab_id: &str) {
        self.set_active_tab.set(tab_id.to_string());
    }

    /// Ask the itinerary page to open its add form
    pub fn request_add(&self) {
        self.set_add_request.update(|v| *v += 1);
    }

    /// Read the configuration
    pub fn with_config<R>(&self, f: impl FnOnce(&PlannerConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn config(&self) -> PlannerConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
