//! Item Form Component
//!
//! Fields of the add/edit modal, each bound to one field of an `ItemForm`
//! signal. Validation happens on submit.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::itinerary::{ItemForm, PeriodMode};
use crate::models::{ItemKind, Period};

#[component]
fn KindToggle(form: RwSignal<ItemForm>) -> impl IntoView {
    let kind_class = move |kind: ItemKind| {
        if form.with(|f| f.kind == kind) {
            "kind-option active"
        } else {
            "kind-option"
        }
    };
    view! {
        <div class="kind-toggle">
            <button
                type="button"
                class=move || kind_class(ItemKind::Activity)
                on:click=move |_| form.update(|f| f.kind = ItemKind::Activity)
            >
                "行程景點"
            </button>
            <button
                type="button"
                class=move || kind_class(ItemKind::Dining)
                on:click=move |_| form.update(|f| f.kind = ItemKind::Dining)
            >
                "餐廳美食"
            </button>
        </div>
    }
}

#[component]
fn ActivityFields(form: RwSignal<ItemForm>, period_mode: PeriodMode) -> impl IntoView {
    let period_select = (period_mode == PeriodMode::Explicit).then(|| {
        view! {
            <div class="field">
                <label>"時段"</label>
                <select
                    prop:value=move || form.with(|f| f.period.as_str())
                    on:change=move |ev| {
                        if let Some(period) = Period::parse(&event_target_value(&ev)) {
                            form.update(|f| f.period = period);
                        }
                    }
                >
                    {Period::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    });

    view! {
        <div class="field-row">
            <div class="field">
                <label>"時間"</label>
                <input
                    type="time"
                    required
                    prop:value=move || form.with(|f| f.time.clone())
                    on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                />
            </div>
            {period_select}
        </div>
        <div class="field">
            <label>"交通方式"</label>
            <input
                placeholder="例如：地鐵、步行"
                prop:value=move || form.with(|f| f.transport.clone())
                on:input=move |ev| form.update(|f| f.transport = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn DiningFields(form: RwSignal<ItemForm>) -> impl IntoView {
    let reserved = move || form.with(|f| f.is_reserved);
    view! {
        <div class="field">
            <label>"是否預訂"</label>
            <div class="radio-row">
                <label>
                    <input
                        type="radio"
                        name="reserved-status"
                        prop:checked=move || !reserved()
                        on:change=move |_| form.update(|f| f.is_reserved = false)
                    />
                    <span>"否"</span>
                </label>
                <label>
                    <input
                        type="radio"
                        name="reserved-status"
                        prop:checked=reserved
                        on:change=move |_| form.update(|f| f.is_reserved = true)
                    />
                    <span>"是"</span>
                </label>
            </div>
        </div>
        <Show when=reserved>
            <div class="field">
                <label>"預訂時間"</label>
                <input
                    type="time"
                    required
                    prop:value=move || form.with(|f| f.reservation_time.clone())
                    on:input=move |ev| form.update(|f| f.reservation_time = event_target_value(&ev))
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ItemFormFields(
    form: RwSignal<ItemForm>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let period_mode = use_app_context().with_config(|c| c.form.period_mode);
    let is_activity = move || form.with(|f| f.kind == ItemKind::Activity);
    let is_editing = move || form.with(|f| f.is_editing());

    view! {
        <form
            class="item-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            // Kind is fixed once an item exists
            <Show when=move || !is_editing()>
                <KindToggle form=form />
            </Show>

            <div class="field">
                <label>{move || if is_activity() { "行程名稱" } else { "餐廳名稱" }}</label>
                <input
                    required
                    placeholder=move || if is_activity() { "例如：東京鐵塔" } else { "例如：敘敘苑燒肉" }
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </div>

            <Show when=is_activity fallback=move || view! { <DiningFields form=form /> }>
                <ActivityFields form=form period_mode=period_mode />
            </Show>

            <div class="field">
                <label>"連結 (Google Maps/訂位)"</label>
                <input
                    type="url"
                    placeholder="https://..."
                    prop:value=move || form.with(|f| f.link.clone())
                    on:input=move |ev| form.update(|f| f.link = event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label>"備註"</label>
                <textarea
                    placeholder="注意事項、訂位代號等..."
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <button type="submit" class="primary-btn">
                {move || if is_editing() { "儲存變更" } else { "確認新增" }}
            </button>
        </form>
    }
}
