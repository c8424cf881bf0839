//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected layout applies the same redirect behavior, so the effect
//! lives here instead of inside each shell.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::{Dispatch, ROUTE_GROUPS, dispatch};
use crate::state::session::SessionState;

/// Options for every navigation that leaves a guarded page.
///
/// The history entry is replaced so Back does not bounce the user into the
/// guarded page again.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Dispatch outcome for the current path, recomputed whenever the path or
/// the session changes.
pub fn guard_outcome(pathname: Memo<String>, session: RwSignal<SessionState>) -> Memo<Dispatch> {
    Memo::new(move |_| pathname.with(|path| session.with(|s| dispatch(&ROUTE_GROUPS, path, s))))
}

/// Navigate away whenever `outcome` turns into a redirect.
pub fn install_redirect<F>(outcome: Memo<Dispatch>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Dispatch::Redirect(target) = outcome.get() {
            log::debug!("route guard redirect to {target}");
            navigate(target, redirect_options());
        }
    });
}
