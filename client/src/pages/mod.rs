//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages render without chrome. Admin and staff pages render inside
//! the shell's outlet and delegate shared behavior to `components`.

pub mod account;
pub mod admin;
pub mod auth;
pub mod home;
pub mod not_found;
pub mod posts;
pub mod staff;
