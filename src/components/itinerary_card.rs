//! Itinerary Card Component
//!
//! One activity or dining entry. The card body swipes left to reveal a
//! delete action; the grip starts a drag or steps the card with the arrow
//! keys.

use leptos::prelude::*;
use leptos_gestures::{
    create_swipe_signals, key_step, make_on_pointerdown, make_on_touchcancel, make_on_touchend, make_on_touchmove,
    make_on_touchstart, DndSignals, DropTarget, KeyStep, SwipeRest, TapOutcome,
};

use crate::context::use_app_context;
use crate::models::{Item, ItemDetails};

#[component]
fn Grip(dnd: DndSignals, id: String, on_key_step: Callback<(String, KeyStep)>) -> impl IntoView {
    let on_pointerdown = make_on_pointerdown(dnd, id.clone());
    view! {
        <div
            class="card-grip"
            role="button"
            tabindex="0"
            aria-label="拖曳排序"
            style="touch-action: none;"
            on:pointerdown=on_pointerdown
            on:touchstart=|ev| ev.stop_propagation()
            on:click=|ev| ev.stop_propagation()
            on:keydown=move |ev| {
                if let Some(step) = key_step(&ev) {
                    ev.prevent_default();
                    on_key_step.run((id.clone(), step));
                }
            }
        >
            "⋮⋮"
        </div>
    }
}

fn notes_view(notes: Option<String>) -> impl IntoView {
    notes.map(|notes| {
        view! {
            <div class="card-notes">
                <span class="card-notes-icon">"📝"</span>
                <p>{notes}</p>
            </div>
        }
    })
}

fn map_link(link: Option<String>, label: &'static str) -> impl IntoView {
    link.filter(|l| !l.is_empty()).map(|href| {
        view! {
            <a
                class="card-link"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev| ev.stop_propagation()
            >
                "📍" {label}
            </a>
        }
    })
}

#[component]
pub fn ItineraryCard(
    item: Item,
    dnd: DndSignals,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_key_step: Callback<(String, KeyStep)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let swipe = create_swipe_signals(ctx.with_config(|c| c.swipe.card()));
    let id = StoredValue::new(item.id.clone());

    let coordinator = ctx.swipe_coordinator;
    if let Some(coordinator) = coordinator {
        coordinator.watch(item.id.clone(), swipe);
    }
    let on_rest = move |rest: SwipeRest| {
        if let (SwipeRest::Open, Some(coordinator)) = (rest, coordinator) {
            id.with_value(|id| coordinator.opened(id));
        }
    };

    let target = DropTarget::Item(item.id.clone());
    let row_class = move || {
        let mut class = String::from("card-row");
        if id.with_value(|id| dnd.is_dragging(id)) {
            class.push_str(" dragging");
        } else if dnd.is_target(&target) {
            class.push_str(" drop-target");
        }
        class
    };

    let edit_item = item.clone();
    let on_content_click = move |_: web_sys::MouseEvent| {
        if dnd.drag_just_ended() {
            return;
        }
        if swipe.tap() == TapOutcome::Primary {
            on_edit.run(edit_item.clone());
        }
    };

    let body = match item.details.clone() {
        ItemDetails::Dining(dining) => {
            let (tag_class, tag_text) = if dining.is_reserved() {
                ("tag reserved", "已預訂")
            } else {
                ("tag", "無預訂")
            };
            let reserved_at = dining.reservation_time().map(|t| format!(" {}", t));
            view! {
                <div class="card-body dining">
                    <div class="card-icon">"🍴"</div>
                    <div class="card-main">
                        <h4 class="card-title">{item.title.clone()}</h4>
                        <div class="card-tags">
                            <span class=tag_class>{tag_text} {reserved_at}</span>
                            {map_link(item.link.clone(), "地圖")}
                        </div>
                        {notes_view(item.notes.clone())}
                    </div>
                    <Grip dnd=dnd id=item.id.clone() on_key_step=on_key_step />
                </div>
            }
            .into_any()
        }
        ItemDetails::Activity(activity) => view! {
            <div class="card-body activity">
                <div class="card-main">
                    <div class="card-tags">
                        <span class="tag time">"🕒 " {activity.time.clone()}</span>
                        {activity.transport.clone().map(|t| view! { <span class="tag transport">"🚆 " {t}</span> })}
                    </div>
                    <h4 class="card-title">
                        <span>{item.title.clone()}</span>
                        {map_link(item.link.clone(), "")}
                    </h4>
                    {notes_view(item.notes.clone())}
                </div>
                <Grip dnd=dnd id=item.id.clone() on_key_step=on_key_step />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=row_class data-dnd-item=item.id.clone()>
            <div class="card-action">
                <button
                    class="card-delete"
                    disabled=move || !swipe.is_open()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if swipe.is_open() {
                            on_delete.run(id.get_value());
                            swipe.close();
                        }
                    }
                >
                    "🗑"
                    <span>"刪除"</span>
                </button>
            </div>
            <div
                class="card-content"
                style=move || swipe.content_style()
                on:touchstart=make_on_touchstart(swipe)
                on:touchmove=make_on_touchmove(swipe)
                on:touchend=make_on_touchend(swipe, on_rest)
                on:touchcancel=make_on_touchcancel(swipe, on_rest)
                on:click=on_content_click
            >
                {body}
            </div>
        </div>
    }
}
