//! Itinerary Page Component
//!
//! One day of the trip. Owns the drag controller and the add/edit form;
//! every change is published as a whole-list replacement of the day.

use leptos::prelude::*;
use leptos_gestures::{bind_dnd_listeners, create_dnd_signals, DndEvent, KeyStep};
use wasm_bindgen::JsCast;

use crate::components::{BucketSection, ItemFormFields, Modal};
use crate::context::use_app_context;
use crate::dialogs::{confirm_then, BrowserDialogs, CONFIRM_DELETE_ITEM};
use crate::itinerary::day_list::remove_by_id;
use crate::itinerary::{categorize, keyboard_step, Bucket, ItemForm, ItineraryDrag};
use crate::models::Item;
use crate::store::{store_day, store_set_day, use_app_store};

/// Give focus back to a card's grip once it has been re-rendered
fn refocus_grip(id: String) {
    request_animation_frame(move || {
        let selector = format!("[data-dnd-item=\"{}\"] .card-grip", id);
        let grip = document()
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(grip) = grip {
            let _ = grip.focus();
        }
    });
}

#[component]
pub fn ItineraryPage(date: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (drag_config, period_mode) = ctx.with_config(|c| (c.drag.clone(), c.form.period_mode));
    let date = StoredValue::new(date);

    let items = Memo::new(move |_| date.with_value(|d| store_day(&store, d)));
    let buckets = Memo::new(move |_| items.with(|items| categorize(items)));
    let set_items = Callback::new(move |next: Vec<Item>| {
        date.with_value(|d| store_set_day(&store, d, next));
    });

    // ========================
    // Drag and keyboard reorder
    // ========================
    let drag = StoredValue::new(ItineraryDrag::new(drag_config.cancel_policy));
    let dnd = create_dnd_signals(drag_config.activation_distance);

    bind_dnd_listeners(dnd, move |event| {
        let current = items.get_untracked();
        let mut next = None;
        match event {
            DndEvent::Started(id) => {
                let mut started = false;
                drag.update_value(|d| started = d.start(&current, &id));
                log::debug!("[DND] Start {} accepted={}", id, started);
            }
            DndEvent::Hovered { target, .. } => {
                next = drag.with_value(|d| d.hover(&current, &target));
            }
            DndEvent::Dropped { dragged, target } => {
                log::debug!("[DND] Drop {} onto {:?}", dragged, target);
                drag.update_value(|d| next = d.drop(&current, &target));
            }
            DndEvent::Cancelled(id) => {
                log::debug!("[DND] Cancel {}", id);
                drag.update_value(|d| next = d.cancel(&current));
            }
        }
        if let Some(next) = next {
            set_items.run(next);
        }
    });

    let on_key_step = Callback::new(move |(id, step): (String, KeyStep)| {
        if let Some(next) = keyboard_step(&items.get_untracked(), &id, step) {
            set_items.run(next);
            refocus_grip(id);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        confirm_then(&BrowserDialogs, CONFIRM_DELETE_ITEM, || {
            set_items.run(remove_by_id(&items.get_untracked(), &id));
        });
    });

    // ========================
    // Add / edit form
    // ========================
    let form = RwSignal::new(ItemForm::create());
    let form_open = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let open_form = move |next: ItemForm| {
        form.set(next);
        form_error.set(None);
        form_open.set(true);
    };
    let on_edit = Callback::new(move |item: Item| open_form(ItemForm::edit(&item)));

    // The header add button bumps a counter; ignore the value seen on mount
    Effect::new(move |prev: Option<u32>| {
        let requested = ctx.add_request.get();
        if prev.is_some_and(|prev| prev != requested) {
            open_form(ItemForm::create());
        }
        requested
    });

    let on_submit = Callback::new(move |()| {
        let result = form.with_untracked(|f| date.with_value(|d| f.apply(&items.get_untracked(), d, period_mode)));
        match result {
            Ok(next) => {
                set_items.run(next);
                form_open.set(false);
                form.set(ItemForm::create());
            }
            Err(e) => {
                log::warn!("[FORM] Rejected: {}", e);
                form_error.set(Some(e.to_string()));
            }
        }
    });

    let title = Signal::derive(move || {
        let title = if form.with(|f| f.is_editing()) { "編輯項目" } else { "新增項目" };
        title.to_string()
    });

    let sections = Bucket::ALL
        .into_iter()
        .map(|bucket| {
            let bucket_items = Signal::derive(move || buckets.with(|b| b.get(bucket).to_vec()));
            view! {
                {(bucket == Bucket::Dining).then(|| view! { <div class="bucket-divider"></div> })}
                <BucketSection
                    bucket=bucket
                    items=bucket_items
                    dnd=dnd
                    on_edit=on_edit
                    on_delete=on_delete
                    on_key_step=on_key_step
                />
            }
        })
        .collect_view();

    view! {
        <div class="itinerary-page">
            {sections}
            <button class="fab" aria-label="新增項目" on:click=move |_| open_form(ItemForm::create())>
                "+"
            </button>
            <Modal open=form_open title=title on_close=Callback::new(move |_| form_open.set(false))>
                <ItemFormFields form=form error=form_error on_submit=on_submit />
            </Modal>
        </div>
    }
}
