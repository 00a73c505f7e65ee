//! Navigation menu shown above every authenticated screen.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::handle::use_session;
use crate::util::guard::{DASHBOARD_PATH, LOGOUT_PATH};

pub fn logout_label(username: &str) -> String {
    format!("Logout ({username})")
}

#[component]
pub fn Menu() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="menu">
            <h1>"Menu"</h1>
            <A href=DASHBOARD_PATH>"Dashboard"</A>
            <br/>
            <A href=LOGOUT_PATH>{move || logout_label(&session.username())}</A>
        </nav>
    }
}
