//! Sidebar menu sequences per role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::match_prefix;

/// Glyph references for sidebar entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    ParkingLot,
    Users,
    Posts,
    Vehicle,
    Ticket,
    Key,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::ParkingLot => "P",
            Self::Users => "☺",
            Self::Posts => "☰",
            Self::Vehicle => "⛟",
            Self::Ticket => "⎘",
            Self::Key => "⚿",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: Icon,
}

pub static ADMIN_NAV: &[NavigationItem] = &[
    NavigationItem { label: "Tổng quan", target: "/admin", icon: Icon::Dashboard },
    NavigationItem { label: "Bãi đỗ xe", target: "/admin/parking-lots", icon: Icon::ParkingLot },
    NavigationItem { label: "Nhân viên", target: "/admin/staff-accounts", icon: Icon::Users },
    NavigationItem { label: "Bài viết", target: "/admin/posts", icon: Icon::Posts },
    NavigationItem { label: "Đổi mật khẩu", target: "/admin/change-password", icon: Icon::Key },
];

pub static STAFF_NAV: &[NavigationItem] = &[
    NavigationItem { label: "Tổng quan", target: "/staff", icon: Icon::Dashboard },
    NavigationItem { label: "Xe ra vào", target: "/staff/vehicles", icon: Icon::Vehicle },
    NavigationItem { label: "Vé gửi xe", target: "/staff/tickets", icon: Icon::Ticket },
    NavigationItem { label: "Đổi mật khẩu", target: "/staff/change-password", icon: Icon::Key },
];

/// Whether `item` should be highlighted at `current_path`.
///
/// The group home only matches itself; otherwise every page of the area
/// would light up the overview entry.
pub fn is_active(current_path: &str, target: &str, group_home: &str) -> bool {
    if target == group_home {
        let path = current_path.split(['?', '#']).next().unwrap_or_default();
        return path.trim_end_matches('/') == group_home;
    }
    match_prefix(target, current_path)
}
