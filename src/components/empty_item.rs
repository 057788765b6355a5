//! Placeholder shown when the list has no entries.

use leptos::prelude::*;

#[component]
pub fn EmptyItem() -> impl IntoView {
    view! {
        <div
            class="empty-item"
            style="flex: 1; display: flex; align-items: center; justify-content: center; color: #888;"
        >
            "Nothing to do yet"
        </div>
    }
}
