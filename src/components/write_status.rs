//! One-line notice while the latest changes are not saved.

use leptos::prelude::*;

use crate::store::use_todo_store;

#[component]
pub fn WriteStatus() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <Show when=move || store.write_error().is_some()>
            <p
                class="write-status"
                role="status"
                title=move || store.write_error().unwrap_or_default()
                style="margin: 0; padding: 6px 20px; background: #fff3cd; color: #856404;"
            >
                "Changes could not be saved"
            </p>
        </Show>
    }
}
