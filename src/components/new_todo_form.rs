//! New Todo Form Component
//!
//! Text input that appends an entry to the todo store.

use leptos::prelude::*;

use crate::store::use_todo_store;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        store.add_todo_list(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="add-form" style="display: flex; gap: 10px; padding: 10px 20px;" on:submit=add_todo>
            <input
                type="text"
                prop:value=new_text
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                placeholder="New Todo..."
                style="flex: 1; padding: 10px; border: 1px solid #ccc; border-radius: 4px;"
            />
            <button
                type="submit"
                style="padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px;"
            >
                "Add"
            </button>
        </form>
    }
}
