use super::breadcrumbs::Breadcrumbs;
use super::filter_bar::DateFilterBar;
use super::level_cards::LevelCards;
use crate::dashboards::d404_labour_summary::navigator::Placeholder;
use crate::dashboards::d404_labour_summary::view_model::LabourSummaryVm;
use contracts::dashboards::d404_labour_summary::DateFilter;
use leptos::prelude::*;
use thaw::*;

/// Labour Summary dashboard: projects -> categories -> departments -> people -> skill types -> skills
#[component]
pub fn LabourSummaryDashboard() -> impl IntoView {
    let vm = LabourSummaryVm::new(DateFilter::default());
    vm.mount();
    on_cleanup(move || vm.teardown());

    let filter = vm.filter();
    let current_level = vm.current_level();
    let loading = vm.is_loading();
    let placeholder = vm.placeholder();

    view! {
        <div id="d404_labour_summary--dashboard" class="d404-dashboard" style="display: flex; flex-direction: column; gap: 12px; padding: 12px;">
            <div style="display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 8px;">
                <div>
                    <h2 style="margin: 0; font-size: 1.1rem; font-weight: 600;">"Labour Summary"</h2>
                    <span style="font-size: 0.8rem; color: #6c757d;">{move || filter.get().label()}</span>
                </div>
                <DateFilterBar filter=filter on_change=Callback::new(move |f| vm.set_filter(f)) />
            </div>

            {move || {
                vm.notification
                    .get()
                    .map(|msg| {
                        view! {
                            <div on:click=move |_| vm.dismiss_notification()>
                                <MessageBar intent=MessageBarIntent::Error>
                                    <span>{msg}</span>
                                </MessageBar>
                            </div>
                        }
                    })
            }}

            <Breadcrumbs
                crumbs=vm.breadcrumbs()
                on_click=Callback::new(move |depth| vm.breadcrumb_click(depth))
            />

            <h3 style="margin: 0; font-size: 1rem; color: #495057;">
                {move || current_level.get().title()}
            </h3>

            {move || {
                if loading.get() {
                    view! {
                        <div class="d404-loading">
                            <span>"Loading data..."</span>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || match placeholder.get() {
                Some(Placeholder::NoFilter) => view! {
                    <div class="d404-placeholder">"Choose a period to see labour data"</div>
                }
                    .into_any(),
                Some(Placeholder::Empty(level)) => view! {
                    <div class="d404-placeholder">
                        {format!("No {} for the selected period", level.plural())}
                    </div>
                }
                    .into_any(),
                Some(Placeholder::Failed(level)) => view! {
                    <div class="d404-placeholder" style="display: flex; align-items: center; gap: 8px;">
                        <span>{format!("Could not load {}", level.plural())}</span>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.retry()>
                            "Retry"
                        </Button>
                    </div>
                }
                    .into_any(),
                None => view! { <></> }.into_any(),
            }}

            <LevelCards
                items=vm.current_items()
                highlighted=vm.selected_skill()
                disabled=vm.is_path_complete()
                on_select=Callback::new(move |item| vm.select(item))
            />
        </div>
    }
}
