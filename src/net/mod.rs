//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the wire schema. Screens
//! never import this module directly; they go through the session context.

pub mod api;
pub mod types;
