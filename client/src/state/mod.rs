//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `theme`, `menu`, `notify`) so each
//! component depends on a small focused model.

pub mod menu;
pub mod notify;
pub mod session;
pub mod theme;
