//! Prev / numbered / Next page controls.

use leptos::prelude::*;

use dexview_common::view::pagination_window;

/// Page navigation. Renders nothing when there is at most one page.
#[component]
pub fn Pagination(
    /// 1-based page currently shown.
    current: usize,
    total: usize,
    max_buttons: usize,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let window = pagination_window(current, total, max_buttons);

    let buttons = window
        .pages()
        .map(|page| {
            let class = if page == current {
                "page-button active"
            } else {
                "page-button"
            };
            view! {
                <button class=class on:click=move |_| on_select.run(page)>
                    {page.to_string()}
                </button>
            }
        })
        .collect_view();

    (total > 1).then(move || {
        view! {
            <nav class="pagination">
                <button
                    class="page-button"
                    disabled={current <= 1}
                    on:click=move |_| on_select.run(current.saturating_sub(1))
                >
                    "Prev"
                </button>
                {buttons}
                <button
                    class="page-button"
                    disabled={current >= total}
                    on:click=move |_| on_select.run(current + 1)
                >
                    "Next"
                </button>
            </nav>
        }
    })
}
