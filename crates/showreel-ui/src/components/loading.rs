//! Loading placeholders.

use leptos::prelude::*;

/// Grey blocks shown while details are being fetched.
#[component]

pub fn Skeleton(
    /// Number of blocks.
    #[prop(default = 3)]
    count: usize,
    /// Extra class for sizing.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let class = format!("skeleton {class}");

    view! {
        <div class="skeleton-row" aria-busy="true">
            {(0..count)
                .map(|_| view! { <div class=class.clone()></div> })
                .collect_view()}
        </div>
    }
}
