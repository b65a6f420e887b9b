//! Animated "thinking" indicator shown while a request is in flight.

use leptos::prelude::*;

/// Three bouncing dots with a label. The animation lives in CSS.
#[component]
pub fn LoadingDots(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="loading-dots">
            <span class="loading-dots__text">{text}</span>
            <span class="loading-dots__dot"></span>
            <span class="loading-dots__dot"></span>
            <span class="loading-dots__dot"></span>
        </div>
    }
}
