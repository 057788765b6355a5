//! Todo Item Component
//!
//! A single row: the entry text and a delete button.

use leptos::prelude::*;

#[component]
pub fn TodoItem(
    #[prop(into)] text: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="todo-item"
            style="display: flex; align-items: center; padding: 10px; border-bottom: 1px solid #eee;"
        >
            <span class="todo-item-text" style="flex: 1;">{text}</span>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                "×"
            </button>
        </div>
    }
}
