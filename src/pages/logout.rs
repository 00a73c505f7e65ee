//! Logout confirmation page.
//!
//! Logout only forgets the tokens in this browser; the server is not told.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::handle::use_session;
use crate::util::guard::{LOGIN_PATH, ROOT_PATH};

pub fn confirmation_prompt(username: &str) -> String {
    format!("Are you sure you ({username}) want to logout?")
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let replace = || NavigateOptions { replace: true, ..Default::default() };

    let navigate_login = navigate.clone();
    let on_logout = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = session.logout() {
            log::error!("logout left stored credentials behind: {e}");
        }
        navigate_login(LOGIN_PATH, replace());
    };
    let on_back = move |_| navigate(ROOT_PATH, replace());

    view! {
        <div class="logout-page">
            <h1>"Logout"</h1>
            <form on:submit=on_logout>
                <h2>{move || confirmation_prompt(&session.username())}</h2>
                <button type="submit">"Logout"</button>
                <button type="button" on:click=on_back>"Back"</button>
            </form>
        </div>
    }
}
