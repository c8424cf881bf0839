//! Admin-area pages. Data panels are filled by the backend views; these
//! pages only lay out the sections.

use leptos::prelude::*;

use crate::components::post_listing::PostListing;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Tổng quan"</h1>
            <div class="stat-grid">
                <StatCard label="Bãi đỗ xe"/>
                <StatCard label="Nhân viên"/>
                <StatCard label="Xe đang gửi"/>
                <StatCard label="Doanh thu hôm nay"/>
            </div>
        </div>
    }
}

#[component]
pub fn ParkingLotsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Bãi đỗ xe"</h1>
            <p class="page-hint">"Danh sách bãi đỗ xe và sức chứa."</p>
        </div>
    }
}

#[component]
pub fn StaffAccountsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Nhân viên"</h1>
            <p class="page-hint">"Quản lý tài khoản nhân viên trực bãi."</p>
        </div>
    }
}

#[component]
pub fn AdminPostsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Bài viết"</h1>
            <PostListing/>
        </div>
    }
}

/// Summary tile; the value stays a dash until the data layer fills it.
#[component]
pub fn StatCard(label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">"—"</span>
        </div>
    }
}
