//! Admin Stay - hotel administration front end
//!
//! Client-side entry point. Everything interesting lives in `admin_stay::app`.

fn main() {
    // Route tracing output to the browser console
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Admin Stay front end");

    dioxus::launch(admin_stay::app::App);
}
