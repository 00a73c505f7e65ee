//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic kept apart from components so it is testable natively.

pub mod guard;
