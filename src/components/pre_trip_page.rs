//! Pre-trip Page Component

use leptos::prelude::*;

use crate::components::TodoSection;
use crate::models::TodoCategory;

#[component]
pub fn PreTripPage() -> impl IntoView {
    view! {
        <div class="pre-trip-page">
            <div class="page-heading">
                <h2>"行前準備"</h2>
                <p>"檢查清單，確保萬無一失！"</p>
            </div>
            {TodoCategory::ALL
                .into_iter()
                .map(|category| view! { <TodoSection category=category /> })
                .collect_view()}
        </div>
    }
}
