//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` is the value, `store` persists it, `context` implements the
//! state machine over an API client, and `handle` exposes it reactively to
//! components.

pub mod context;
pub mod handle;
pub mod session;
pub mod store;
