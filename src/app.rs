//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::components::menu::Menu;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, logout::LogoutPage, register::RegisterPage};
use crate::state::handle::{BrowserSessionContext, SessionHandle, use_session};
use crate::state::session::Session;
use crate::util::guard::{Resolution, Screen, ScreenTree, resolve, screen_tree};

/// Root application component.
///
/// Provides the session handle and mounts the router. `initial` is the
/// session produced by `SessionContext::init` at startup.
#[component]
pub fn App(context: BrowserSessionContext, initial: Session) -> impl IntoView {
    provide_meta_context();
    SessionHandle::provide(context, initial);

    view! {
        <Title text="Company Portal"/>
        <Router>
            <Screens/>
        </Router>
    }
}

fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::Register => view! { <RegisterPage/> }.into_any(),
        Screen::Login => view! { <LoginPage/> }.into_any(),
        Screen::Logout => view! { <LogoutPage/> }.into_any(),
        Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
        Screen::Home => ().into_any(),
    }
}

/// Navigation guard: picks the screen tree from the session phase and the
/// screen (or redirect) from the current path.
#[component]
fn Screens() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let tree = Memo::new(move |_| screen_tree(session.session.with(Session::phase)));

    move || {
        let tree = tree.get();
        let body = match resolve(&location.pathname.get(), tree) {
            Resolution::Wait => view! { <p class="session-loading">"Loading session..."</p> }.into_any(),
            Resolution::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
            Resolution::Render(screen) => render_screen(screen),
        };
        match tree {
            ScreenTree::Authenticated => view! {
                <Menu/>
                <main>{body}</main>
            }
            .into_any(),
            ScreenTree::Public | ScreenTree::Pending => view! { <main>{body}</main> }.into_any(),
        }
    }
}
