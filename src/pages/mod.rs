//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are placeholders; access control happens in `app::Guarded` before
//! any page is mounted.

pub mod history;
pub mod home;
pub mod login;
pub mod predict;
pub mod profile;
