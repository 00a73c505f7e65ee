//! Reusable UI components shared by pages.

pub mod form_field;
pub mod menu;
