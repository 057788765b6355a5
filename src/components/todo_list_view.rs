//! Todo List View Component
//!
//! Scrollable list of todo rows, or the empty placeholder.

use leptos::prelude::*;

use crate::components::{EmptyItem, TodoItem};
use crate::list_view::{ListContent, TodoRow};
use crate::store::use_todo_store;

/// Renders every entry of the todo store as a deletable row
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    let content = Memo::new(move |_| ListContent::from_entries(&store.todo_list()));
    let has_rows = move || !content.with(ListContent::is_placeholder);

    // The placeholder is one element; stretch the region so it is not
    // squeezed to content size
    let region_style = move || {
        if content.with(ListContent::fills_available_space) {
            "overflow-y: auto; flex: 1; display: flex; flex-direction: column;"
        } else {
            "overflow-y: auto;"
        }
    };

    view! {
        <div class="todo-list" style=region_style>
            <Show when=has_rows fallback=|| view! { <EmptyItem /> }>
                <For
                    each=move || content.with(ListContent::rows)
                    key=|row: &TodoRow| row.key.clone()
                    children=move |row: TodoRow| {
                        let id = row.id;
                        view! {
                            <TodoItem
                                text=row.text
                                on_delete=move |_| {
                                    let _ = store.remove_todo(id);
                                }
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
