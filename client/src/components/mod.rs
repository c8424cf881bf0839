//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components (`navbar`, `sidebar`, `shell`, ...) read shared state
//! from Leptos context. Widgets (`change_password_form`, `post_listing`)
//! own their own state and talk outward only through `state::notify`.

pub mod back_link;
pub mod change_password_form;
pub mod navbar;
pub mod notifications;
pub mod pagination;
pub mod post_listing;
pub mod session_menu;
pub mod shell;
pub mod sidebar;
pub mod theme_toggle;
