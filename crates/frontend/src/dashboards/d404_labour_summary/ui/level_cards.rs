use crate::shared::components::CardAnimated;
use crate::shared::number_format::format_count;
use contracts::dashboards::d404_labour_summary::AggregateItem;
use leptos::prelude::*;

/// Stagger between card appear animations
const STAGGER_MS: u32 = 40;
const MAX_DELAY_MS: u32 = 600;

fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
        .min(MAX_DELAY_MS)
}

/// Grid of aggregate cards for the displayed level
#[component]
pub fn LevelCards(
    #[prop(into)] items: Signal<Vec<AggregateItem>>,
    /// Id of the highlighted item (selected skill at the terminal level)
    #[prop(into)]
    highlighted: Signal<Option<String>>,
    /// Cards are read-only once the path is complete
    #[prop(into)]
    disabled: Signal<bool>,
    on_select: Callback<AggregateItem>,
) -> impl IntoView {
    view! {
        <div
            class="d404-cards"
            style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;"
        >
            {move || {
                let highlighted = highlighted.get();
                let disabled = disabled.get();
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let is_highlighted = highlighted.as_deref() == Some(item.id.as_str());
                        let style = format!(
                            "cursor: {}; border: 2px solid {};",
                            if disabled { "default" } else { "pointer" },
                            if is_highlighted { "var(--color-primary, #0d6efd)" } else { "transparent" },
                        );
                        let title = item.name.clone();
                        let total = format_count(item.total_count);
                        view! {
                            <div
                                class="d404-card"
                                on:click=move |_| {
                                    if !disabled {
                                        on_select.run(item.clone());
                                    }
                                }
                            >
                                <CardAnimated style=style delay_ms=stagger_delay(i)>
                                    <div class="d404-card__name" style="font-weight: 600; color: #343a40;">{title}</div>
                                    <div class="d404-card__total" style="font-size: 1.5rem; font-weight: 700;">{total}</div>
                                    <div class="d404-card__caption" style="font-size: 0.75rem; color: #6c757d;">"Total count"</div>
                                </CardAnimated>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
