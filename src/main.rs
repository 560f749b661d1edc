//! Client-side entry point. Trunk builds this binary to WASM and mounts
//! the app into the document body.

use portfolio::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
