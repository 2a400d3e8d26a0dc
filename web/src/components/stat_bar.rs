use leptos::prelude::*;

use dexview_common::catalog::Stat;

/// Labelled horizontal bar for one base stat.
#[component]
pub fn StatBar(stat: Stat) -> impl IntoView {
    let style = format!("width: {:.1}%", stat.percent());

    view! {
        <div class="stat-row">
            <div class="stat-head">
                <span class="stat-name">{stat.name.clone()}</span>
                <span class="stat-value">{stat.value.to_string()}</span>
            </div>
            <div class="stat-track">
                <div class="stat-fill" style=style></div>
            </div>
        </div>
    }
}
