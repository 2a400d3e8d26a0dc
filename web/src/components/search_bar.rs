//! Search input with a clear button.

use leptos::prelude::*;

/// Reports every edit of the term through `on_search`.
#[component]
pub fn SearchBar(
    term: RwSignal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-field">
                <input
                    type="text"
                    placeholder="Search by name or number"
                    autofocus=true
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        term.set(value.clone());
                        on_search.run(value);
                    }
                />
                <Show when=move || !term.get().is_empty()>
                    <button
                        class="search-clear"
                        on:click=move |_| {
                            term.set(String::new());
                            on_search.run(String::new());
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>
        </div>
    }
}
