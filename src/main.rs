//! Todo List Frontend Entry Point

use leptos::prelude::*;
use todo_list_ui::{logging, App};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init_logging(logging::default_log_level()) {
        web_sys::console::error_1(&err.into());
    }
    mount_to_body(App);
}
