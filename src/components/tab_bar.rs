//! Tab Bar Components
//!
//! The trip day strip under the header and the floating bottom navigation.

use leptos::prelude::*;

use crate::context::{use_app_context, ViewMode};

/// Day tabs, shown only in the itinerary view
#[component]
pub fn TripTabBar() -> impl IntoView {
    let ctx = use_app_context();
    let tabs = ctx.with_config(|c| c.trip.tabs.clone());

    view! {
        <nav class="trip-tab-bar">
            {tabs
                .into_iter()
                .map(|tab| {
                    let id = StoredValue::new(tab.id.clone());
                    let is_active = move || id.with_value(|id| ctx.active_tab.with(|active| active == id));
                    let tab_class = move || if is_active() { "trip-tab active" } else { "trip-tab" };
                    view! {
                        <button class=tab_class on:click=move |_| id.with_value(|id| ctx.set_active_tab(id))>
                            <span class="trip-tab-label">{tab.label}</span>
                            <span class="trip-tab-sub">{tab.sub_label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn NavButton(mode: ViewMode, icon: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let nav_class = move || {
        if ctx.view_mode.get() == mode {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };
    view! {
        <button class=nav_class on:click=move |_| ctx.set_view_mode(mode)>
            <span class="nav-icon">{icon}</span>
            <span class="nav-label">{label}</span>
        </button>
    }
}

#[component]
pub fn BottomNav() -> impl IntoView {
    view! {
        <div class="bottom-nav">
            <NavButton mode=ViewMode::Shopping icon="🛍" label="購物清單" />
            <NavButton mode=ViewMode::Itinerary icon="📅" label="行程規劃" />
            <NavButton mode=ViewMode::Settings icon="⚙" label="備份設定" />
        </div>
    }
}
