use crate::dashboards::LabourSummaryDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Thaw components read their theme from the config context
    view! {
        <ConfigProvider>
            <LabourSummaryDashboard />
        </ConfigProvider>
    }
}
