//! Open/closed state machine for dropdown menus.
//!
//! Kept local to the owning component; nothing global observes it.
//! `RouteMenu` ties an open menu to the path it was opened on, so a route
//! change reads as closed before any effect has run.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move a menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The trigger button was activated.
    Trigger,
    /// A click landed outside the menu panel.
    OutsideInteraction,
    /// One of the menu actions was chosen.
    ItemSelected,
    /// Explicit close (Escape key or close control).
    Close,
    /// The router moved to another path.
    RouteChanged,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Trigger) => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Menu state scoped to the current route.
#[derive(Clone, Copy)]
pub struct RouteMenu {
    /// Path the menu was opened on; `None` while closed.
    opened_at: RwSignal<Option<String>>,
    pathname: Memo<String>,
}

impl RouteMenu {
    pub fn new(pathname: Memo<String>) -> Self {
        Self { opened_at: RwSignal::new(None), pathname }
    }

    pub fn state(&self) -> MenuState {
        let here = self.pathname.get();
        Self::resolve(&here, self.opened_at.get().as_deref())
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Apply `event` to the state as seen on the current path.
    pub fn send(&self, event: MenuEvent) {
        let here = self.pathname.get_untracked();
        let current = Self::resolve(&here, self.opened_at.get_untracked().as_deref());
        let next = current.next(event);
        self.opened_at.set(next.is_open().then_some(here));
    }

    /// Drop the stored open path on every navigation so returning to the
    /// original path does not reopen the menu.
    pub fn close_on_route_change(self) {
        let pathname = self.pathname;
        Effect::new(move || {
            pathname.track();
            self.send(MenuEvent::RouteChanged);
        });
    }

    fn resolve(here: &str, opened_at: Option<&str>) -> MenuState {
        if opened_at == Some(here) { MenuState::Open } else { MenuState::Closed }
    }
}
