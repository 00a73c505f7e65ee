//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form fields and error display and reaches the session
//! only through `state::handle::use_session`.

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod register;
