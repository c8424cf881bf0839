//! Staff-area pages.

use leptos::prelude::*;

use crate::pages::admin::StatCard;

#[component]
pub fn StaffDashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Tổng quan ca trực"</h1>
            <div class="stat-grid">
                <StatCard label="Xe vào"/>
                <StatCard label="Xe ra"/>
                <StatCard label="Chỗ trống"/>
            </div>
        </div>
    }
}

#[component]
pub fn VehiclesPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Xe ra vào"</h1>
            <p class="page-hint">"Ghi nhận lượt xe vào và ra khỏi bãi."</p>
        </div>
    }
}

#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Vé gửi xe"</h1>
            <p class="page-hint">"Tra cứu và phát hành vé gửi xe."</p>
        </div>
    }
}
