//! UI Components
//!
//! Leptos components for the todo screen.

mod empty_item;
mod new_todo_form;
mod todo_item;
mod todo_list_view;
mod write_status;

pub use empty_item::EmptyItem;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
pub use write_status::WriteStatus;
