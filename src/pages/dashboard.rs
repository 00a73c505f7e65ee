//! Authenticated landing page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::handle::use_session;

pub fn welcome_message(username: &str) -> String {
    format!("Welcome {username}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>{move || welcome_message(&session.username())}</p>
        </div>
    }
}
