//! Navigation guard: which screen tree is mounted and where each path goes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` asks [`screen_tree`] which tree to mount for the current session
//! phase, then [`resolve`] maps the router's pathname to a screen or a
//! redirect inside that tree. Both are pure so the navigation contract is
//! tested without a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionPhase;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/users/login";
pub const LOGOUT_PATH: &str = "/users/logout";
pub const DASHBOARD_PATH: &str = "/app/dashboard";

/// Top-level screen tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenTree {
    /// Session not initialized yet; render a placeholder only.
    Pending,
    /// Registration and login.
    Public,
    /// Menu shell with dashboard and logout.
    Authenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Register,
    Login,
    Logout,
    Dashboard,
    /// Authenticated root: menu shell only.
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Redirect(&'static str),
    Wait,
}

pub fn screen_tree(phase: SessionPhase) -> ScreenTree {
    match phase {
        SessionPhase::Initializing => ScreenTree::Pending,
        SessionPhase::Anonymous => ScreenTree::Public,
        SessionPhase::Authenticated => ScreenTree::Authenticated,
    }
}

/// Strip query, fragment and trailing slashes; empty becomes `/`.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

/// Map a pathname to what the given tree renders there.
pub fn resolve(path: &str, tree: ScreenTree) -> Resolution {
    let path = normalize(path);
    match tree {
        ScreenTree::Pending => Resolution::Wait,
        ScreenTree::Public => match path {
            ROOT_PATH => Resolution::Render(Screen::Register),
            LOGIN_PATH => Resolution::Render(Screen::Login),
            _ => Resolution::Redirect(LOGIN_PATH),
        },
        ScreenTree::Authenticated => match path {
            ROOT_PATH => Resolution::Render(Screen::Home),
            DASHBOARD_PATH => Resolution::Render(Screen::Dashboard),
            LOGOUT_PATH => Resolution::Render(Screen::Logout),
            LOGIN_PATH => Resolution::Redirect(DASHBOARD_PATH),
            _ => Resolution::Redirect(ROOT_PATH),
        },
    }
}
