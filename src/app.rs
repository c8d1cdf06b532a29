//! Trip Planner App
//!
//! Header with the day tabs, the page for the current view, and the bottom
//! navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BottomNav, ItineraryPage, PreTripPage, SettingsPage, ShoppingPage, TripTabBar};
use crate::config::PlannerConfig;
use crate::context::{use_app_context, AppContext, ViewMode};
use crate::storage::LocalStorage;
use crate::store::{persist_store, AppState, AppStore};

/// Open local storage, load state from it and keep it written back.
/// Without storage the app still runs on seed data.
fn init_store(config: &PlannerConfig) -> AppStore {
    match LocalStorage::open() {
        Ok(storage) => {
            let store = Store::new(AppState::load(&storage, &config.storage));
            persist_store(store, storage, config.storage.clone());
            log::info!("[APP] State loaded from local storage");
            store
        }
        Err(e) => {
            log::error!("[APP] Local storage unavailable, changes will not be saved: {}", e);
            Store::new(AppState::seeded())
        }
    }
}

#[component]
fn ItineraryView() -> impl IntoView {
    let ctx = use_app_context();

    // Rebuilt whenever the tab changes so each day starts with fresh drag state
    move || {
        let tab_id = ctx.active_tab.get();
        let date = ctx.with_config(|c| c.trip.tab(&tab_id).and_then(|t| t.date.clone()));
        match date {
            Some(date) => view! { <ItineraryPage date=date /> }.into_any(),
            None => view! { <PreTripPage /> }.into_any(),
        }
    }
}

#[component]
pub fn App(config: PlannerConfig) -> impl IntoView {
    let store = init_store(&config);
    provide_context(store);

    let title = config.trip.title.clone();
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let in_itinerary = move || ctx.view_mode.get() == ViewMode::Itinerary;
    // The add button belongs to day tabs only
    let show_add = move || {
        in_itinerary() && ctx.active_tab.with(|id| ctx.with_config(|c| c.trip.tab(id).is_some_and(|t| t.date.is_some())))
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-title-row">
                    <div class="app-logo">"✈"</div>
                    <h1>{title}</h1>
                    <Show when=show_add>
                        <button class="icon-btn add-btn" aria-label="新增項目" on:click=move |_| ctx.request_add()>
                            "+"
                        </button>
                    </Show>
                </div>
                <Show when=in_itinerary>
                    <TripTabBar />
                </Show>
            </header>

            <main class="main-content">
                {move || match ctx.view_mode.get() {
                    ViewMode::Itinerary => view! { <ItineraryView /> }.into_any(),
                    ViewMode::Shopping => view! { <ShoppingPage /> }.into_any(),
                    ViewMode::Settings => view! { <SettingsPage /> }.into_any(),
                }}
            </main>

            <BottomNav />
        </div>
    }
}
