//! Todo Section Component
//!
//! One pre-trip checklist. Tapping a row toggles it; swiping left reveals
//! delete.

use leptos::prelude::*;
use leptos_gestures::{
    create_swipe_signals, make_on_touchcancel, make_on_touchend, make_on_touchmove, make_on_touchstart, SwipeRest,
    TapOutcome,
};

use crate::context::use_app_context;
use crate::dialogs::{confirm_then, BrowserDialogs, CONFIRM_DELETE_ITEM};
use crate::models::{TodoCategory, TodoItem};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todos::{add_todo, remove_todo, toggle_todo};

fn category_icon(category: TodoCategory) -> &'static str {
    match category {
        TodoCategory::Tasks => "📋",
        TodoCategory::CarryOn => "💼",
        TodoCategory::Checked => "🧳",
    }
}

#[component]
fn TodoRow(todo: TodoItem, category: TodoCategory) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let swipe = create_swipe_signals(ctx.with_config(|c| c.swipe.todo()));
    let row_key = format!("{:?}:{}", category, todo.id);
    let id = StoredValue::new(todo.id.clone());

    let coordinator = ctx.swipe_coordinator;
    if let Some(coordinator) = coordinator {
        coordinator.watch(row_key.clone(), swipe);
    }
    let row_key = StoredValue::new(row_key);
    let on_rest = move |rest: SwipeRest| {
        if let (SwipeRest::Open, Some(coordinator)) = (rest, coordinator) {
            row_key.with_value(|key| coordinator.opened(key));
        }
    };

    let on_tap = move |_: web_sys::MouseEvent| {
        if swipe.tap() == TapOutcome::Primary {
            id.with_value(|id| toggle_todo(&mut store.todos().write(), category, id));
        }
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !swipe.is_open() {
            return;
        }
        confirm_then(&BrowserDialogs, CONFIRM_DELETE_ITEM, || {
            id.with_value(|id| remove_todo(&mut store.todos().write(), category, id));
        });
        swipe.close();
    };

    let (mark, text_class) = if todo.completed {
        ("✔", "todo-text done")
    } else {
        ("○", "todo-text")
    };

    view! {
        <div class="todo-row">
            <div class="todo-action">
                <button class="todo-delete" disabled=move || !swipe.is_open() on:click=on_delete>
                    "🗑"
                </button>
            </div>
            <div
                class="todo-content"
                style=move || swipe.content_style()
                on:touchstart=make_on_touchstart(swipe)
                on:touchmove=make_on_touchmove(swipe)
                on:touchend=make_on_touchend(swipe, on_rest)
                on:touchcancel=make_on_touchcancel(swipe, on_rest)
                on:click=on_tap
            >
                <span class="todo-mark">{mark}</span>
                <span class=text_class>{todo.text.clone()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn TodoSection(category: TodoCategory) -> impl IntoView {
    let store = use_app_store();
    let items = Memo::new(move |_| store.todos().with(|todos| todos.list(category).to_vec()));
    let (new_text, set_new_text) = signal(String::new());

    let add = move || {
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        if let Some(id) = add_todo(&mut store.todos().write(), category, &text) {
            log::debug!("[TODO] Added {} to {:?}", id, category);
            set_new_text.set(String::new());
        }
    };

    view! {
        <section class="todo-section">
            <header class="todo-header">
                <span class="todo-icon">{category_icon(category)}</span>
                <h3>{category.label()}</h3>
            </header>
            <div class="todo-list">
                <For
                    each=move || items.get()
                    key=|todo| (todo.id.clone(), todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo category=category /> }
                />
            </div>
            <div class="todo-add">
                <input
                    type="text"
                    placeholder="新增項目..."
                    prop:value=new_text
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button class="icon-btn" on:click=move |_| add()>"+"</button>
            </div>
        </section>
    }
}
