//! Todo App
//!
//! Root component: builds the todo store, shares it via context and
//! starts the one-time load.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoListView, WriteStatus};
use crate::config::TodoConfig;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::load();
    let store = TodoStore::open(&config);

    // Provide the store to all children
    provide_context(store);

    // Load the saved list once on mount
    store.init();

    view! {
        <div
            class="todo-app"
            style="display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;"
        >
            <h1 style="padding: 0 20px;">"My Todos"</h1>
            <WriteStatus />
            <TodoListView />
            <NewTodoForm />
        </div>
    }
}
