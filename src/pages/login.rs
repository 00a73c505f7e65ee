//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::error::SessionError;
use crate::state::handle::use_session;
use crate::util::guard::ROOT_PATH;

/// Trim the username and require both fields.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Inline message for a failed sign-in.
pub fn login_failure_message(err: &SessionError) -> String {
    let SessionError::Api(api) = err else {
        return format!("Login failed: {err}");
    };
    let messages: Vec<String> = api.field_messages().into_iter().map(|(_, text)| text).collect();
    if messages.is_empty() {
        format!("Login failed: {err}")
    } else {
        format!("Login failed: {}", messages.join(" "))
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.pending.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(Some(message.to_owned()));
                    return;
                }
            };
        info.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(username_value, password_value).await {
                Ok(()) => navigate(ROOT_PATH, NavigateOptions { replace: true, ..Default::default() }),
                Err(e) => info.set(Some(login_failure_message(&e))),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Login"</h1>
            <form class="login-form" on:submit=on_submit>
                <FormField label="Username" name="username" value=username/>
                <FormField label="Password" name="password" input_type="password" value=password/>
                <button type="submit" disabled=move || session.pending.get()>
                    {move || if session.pending.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            {move || info.get().map(|message| view! { <p class="login-message">{message}</p> })}
            <p>"Don't have an account? " <A href=ROOT_PATH>"Register"</A></p>
        </div>
    }
}
