//! # company-portal
//!
//! Leptos + WASM client for company registration and login.
//!
//! The crate holds the session state machine (`state`), the REST client for
//! the authentication API (`net`), the navigation guard (`util::guard`), and
//! the screens (`pages`, `components`). Browser-only code sits behind the
//! `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: initialize logging, restore the session, mount the app.
///
/// # Errors
///
/// A session that cannot be read from storage aborts startup; the app is not
/// mounted and the error is returned to the JS runtime.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ApiConfig;
    use crate::net::api::HttpAuthClient;
    use crate::state::context::SessionContext;
    use crate::state::store::BrowserStorage;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(crate::config::log_level()) {
        // No logger to report through; write straight to the console.
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }

    let config = ApiConfig::from_env();
    log::info!("starting company portal against {}", config.base_url());
    let context = SessionContext::new(BrowserStorage, HttpAuthClient::new(config));
    let initial = context
        .init()
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("session init failed: {e}")))?;

    leptos::mount::mount_to_body(move || view! { <App context=context initial=initial/> });
    Ok(())
}
