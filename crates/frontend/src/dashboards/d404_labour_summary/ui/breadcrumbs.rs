use crate::dashboards::d404_labour_summary::navigator::Breadcrumb;
use leptos::prelude::*;

/// Breadcrumb trail of the drill-down; the active (deepest) crumb is not clickable
#[component]
pub fn Breadcrumbs(
    #[prop(into)] crumbs: Signal<Vec<Breadcrumb>>,
    /// Receives the depth of the clicked crumb
    on_click: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="d404-breadcrumbs" style="display: flex; align-items: center; flex-wrap: wrap; gap: 4px; font-size: 0.875rem;">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .map(|crumb| {
                        let depth = crumb.depth;
                        let separator = (depth > 0)
                            .then(|| view! { <span style="color: #adb5bd;">" › "</span> });
                        let segment = if crumb.is_active {
                            view! {
                                <span class="d404-crumb d404-crumb--active" style="font-weight: 600; color: #212529;">
                                    {crumb.label}
                                </span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button
                                    class="d404-crumb"
                                    style="background: none; border: none; padding: 0; color: var(--color-primary, #0d6efd); cursor: pointer; text-decoration: underline;"
                                    on:click=move |_| on_click.run(depth)
                                >
                                    {crumb.label}
                                </button>
                            }
                                .into_any()
                        };
                        view! {
                            {separator}
                            {segment}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
