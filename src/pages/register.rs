//! Company registration page (public root).
//!
//! SYSTEM CONTEXT
//! ==============
//! Creates a company and its first user, then sends the user to the login
//! page. Server validation errors are shown next to the field they name;
//! anything keyed by an unknown name is shown in a general banner.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::error::{ApiError, SessionError};
use crate::net::types::CompanyRegistration;
use crate::state::handle::use_session;
use crate::util::guard::LOGIN_PATH;

/// Form fields the server may attach errors to.
pub const REGISTER_FIELDS: [&str; 5] = ["name", "domain", "email", "username", "password"];

/// Errors from the last failed submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    fields: BTreeMap<String, String>,
    general: Vec<String>,
}

impl RegistrationErrors {
    /// Split a failure into per-field and general messages.
    pub fn from_error(err: &SessionError) -> Self {
        let mut errors = Self::default();
        let SessionError::Api(api @ ApiError::Rejected { .. }) = err else {
            errors.general.push(err.to_string());
            return errors;
        };
        for (key, text) in api.field_messages() {
            if REGISTER_FIELDS.contains(&key.as_str()) {
                errors.fields.insert(key, text);
            } else {
                errors.general.push(text);
            }
        }
        errors
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// General messages joined into one line, if any.
    pub fn general(&self) -> Option<String> {
        if self.general.is_empty() {
            None
        } else {
            Some(self.general.join(" "))
        }
    }
}

/// Build the request body. Everything except the password is trimmed.
pub fn build_registration(
    username: &str,
    password: &str,
    email: &str,
    company_name: &str,
    domain: &str,
) -> CompanyRegistration {
    CompanyRegistration {
        username: username.trim().to_owned(),
        password: password.to_owned(),
        email: email.trim().to_owned(),
        name: company_name.trim().to_owned(),
        domain: domain.trim().to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(RegistrationErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.pending.get_untracked() {
            return;
        }
        let registration = build_registration(
            &username.get_untracked(),
            &password.get_untracked(),
            &email.get_untracked(),
            &name.get_untracked(),
            &domain.get_untracked(),
        );
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register_company(registration).await {
                Ok(()) => {
                    errors.set(RegistrationErrors::default());
                    navigate(LOGIN_PATH, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => errors.set(RegistrationErrors::from_error(&e)),
            }
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.field(field).map(str::to_owned)))
    };

    view! {
        <div class="register-page">
            <h1>"Register Company"</h1>
            {move || {
                errors
                    .with(RegistrationErrors::general)
                    .map(|message| view! { <p class="form-error form-error--general">{message}</p> })
            }}
            <form class="register-form" on:submit=on_submit>
                <FormField label="Company Name" name="name" value=name error=field_error("name")/>
                <FormField label="Domain" name="domain" value=domain error=field_error("domain")/>
                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    value=email
                    error=field_error("email")
                />
                <FormField label="Username" name="username" value=username error=field_error("username")/>
                <FormField
                    label="Password"
                    name="password"
                    input_type="password"
                    value=password
                    error=field_error("password")
                />
                <button type="submit" disabled=move || session.pending.get()>
                    {move || if session.pending.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p>"Already have an account? " <A href=LOGIN_PATH>"Login"</A></p>
        </div>
    }
}
