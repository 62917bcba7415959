//! Thaw [`Card`] with the `card-appear` entrance animation
//!
//! Use `<CardAnimated style="..." delay_ms=N>` instead of `<Card attr:style="...">`;
//! the keyframes live in `index.html`. Increasing `delay_ms` across a list gives
//! the stagger effect.

use leptos::prelude::*;
use thaw::Card;

fn animated_style(delay_ms: u32, style: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=animated_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}
