//! Bucket Section Component
//!
//! One display bucket of a day: header with count, the cards, and the
//! drop zone the whole section acts as.

use leptos::prelude::*;
use leptos_gestures::{DndSignals, DropTarget, KeyStep};

use crate::components::ItineraryCard;
use crate::itinerary::Bucket;
use crate::models::Item;

fn bucket_icon(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Morning => "☀️",
        Bucket::Afternoon => "🌇",
        Bucket::Evening => "🌙",
        Bucket::Dining => "🍴",
    }
}

#[component]
pub fn BucketSection(
    bucket: Bucket,
    #[prop(into)] items: Signal<Vec<Item>>,
    dnd: DndSignals,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_key_step: Callback<(String, KeyStep)>,
) -> impl IntoView {
    let zone = DropTarget::Zone(bucket.id().to_string());
    let section_class = move || {
        if dnd.is_target(&zone) {
            "bucket-section drop-over"
        } else {
            "bucket-section"
        }
    };
    let count = move || items.with(|items| items.len());

    view! {
        <section class=section_class data-dnd-zone=bucket.id()>
            <header class="bucket-header">
                <span class="bucket-icon">{bucket_icon(bucket)}</span>
                <h3>{bucket.title()}</h3>
                <span class="bucket-count">{count}</span>
            </header>
            <div class="bucket-items">
                <Show
                    when=move || { count() > 0 }
                    fallback=move || view! { <div class="bucket-empty">{bucket.empty_hint()}</div> }
                >
                    // Keyed by the whole item so edits re-render the card
                    <For
                        each=move || items.get()
                        key=|item| item.clone()
                        children=move |item| {
                            view! {
                                <ItineraryCard
                                    item=item
                                    dnd=dnd
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_key_step=on_key_step
                                />
                            }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}
