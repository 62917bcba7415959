use chrono::NaiveDate;
use contracts::dashboards::d404_labour_summary::{DateFilter, Granularity};
use leptos::prelude::*;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Period selector of the labour summary: granularity, year, month, reference date
#[component]
pub fn DateFilterBar(
    /// Currently applied filter
    #[prop(into)]
    filter: Signal<DateFilter>,
    /// Called with the edited filter on every change
    on_change: Callback<DateFilter>,
) -> impl IntoView {
    let select_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";

    let on_granularity = move |ev: web_sys::Event| {
        if let Some(granularity) = Granularity::parse(&event_target_value(&ev)) {
            on_change.run(filter.get_untracked().with_granularity(granularity));
        }
    };

    let on_year = move |ev: web_sys::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            on_change.run(filter.get_untracked().with_year(year));
        }
    };

    let on_month = move |ev: web_sys::Event| {
        let month = event_target_value(&ev).parse::<u32>().ok();
        on_change.run(filter.get_untracked().with_month(month));
    };

    let on_date = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let next = match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => DateFilter::weekly(date),
            Err(_) => {
                let mut next = filter.get_untracked();
                next.reference_date = None;
                next
            }
        };
        on_change.run(next);
    };

    let granularity = move || filter.get().granularity;

    view! {
        <div class="d404-filter-bar" style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
            <select
                style=select_style
                title="Granularity"
                prop:value=move || granularity().as_str()
                on:change=on_granularity
            >
                {Granularity::ALL
                    .into_iter()
                    .map(|g| {
                        view! {
                            <option value=g.as_str() selected=move || granularity() == g>
                                {g.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <input
                type="number"
                style=select_style
                title="Year"
                min="2000"
                max="2100"
                prop:value=move || filter.get().year.to_string()
                on:change=on_year
            />

            <Show when=move || granularity() != Granularity::Yearly>
                <select
                    style=select_style
                    title="Month"
                    prop:value=move || filter.get().month.map(|m| m.to_string()).unwrap_or_default()
                    on:change=on_month
                >
                    <option value="">"Month…"</option>
                    {MONTHS
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            let month = i as u32 + 1;
                            view! {
                                <option
                                    value=month.to_string()
                                    selected=move || filter.get().month == Some(month)
                                >
                                    {*name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </Show>

            <Show when=move || granularity() == Granularity::Weekly>
                <input
                    type="date"
                    style=select_style
                    title="Any day of the week"
                    prop:value=move || {
                        filter
                            .get()
                            .reference_date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default()
                    }
                    on:change=on_date
                />
            </Show>
        </div>
    }
}
