//! Catalog page – searchable, paginated grid of every item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dexview_common::catalog::{Item, ItemPage};
use dexview_common::controller::{CatalogController, ViewPhase};
use dexview_common::error::CatalogError;
use dexview_common::view::ViewState;

use crate::components::item_card::ItemCard;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::model::CatalogSnapshot;

// ─── Server functions ────────────────────────────────────────────────────────

/// The full catalog plus list-view settings.
///
/// An unreachable upstream yields an empty catalog rather than an error.
#[server]
pub async fn get_catalog() -> Result<CatalogSnapshot, ServerFnError> {
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;

    let page = match state.client.list_all().await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("Catalog fetch failed, serving empty list: {e}");
            ItemPage::empty()
        }
    };

    Ok(CatalogSnapshot {
        page,
        paging: state.config.paging(),
    })
}

// ─── Page component ──────────────────────────────────────────────────────────

/// List view with search and pagination.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let controller = RwSignal::new(CatalogController::default());
    let term = RwSignal::new(String::new());

    // Rendered on the server; seeds the controller once it resolves.
    let initial = Resource::new(|| (), |_| get_catalog());

    // Later reloads. Each call takes a fresh ticket so a slower, older
    // response can never overwrite a newer one.
    let reload = move || {
        let Some(ticket) = controller.try_update(|c| c.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = get_catalog().await;
            controller.update(|c| {
                let result = take_snapshot(c, result);
                c.complete_load(ticket, result);
            });
        });
    };

    let on_search = Callback::new(move |value: String| controller.update(|c| c.search(&value)));
    let on_page = Callback::new(move |page: usize| {
        controller.update(|c| c.go_to(page));
        scroll_to_top();
    });

    view! {
        <div class="catalog-page">
            <h1 class="page-title">"Creature Catalog"</h1>
            <SearchBar term=term on_search=on_search/>
            <button class="reload-button" on:click=move |_| reload()>"Reload"</button>

            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || initial.get().map(|result| {
                    controller.update_untracked(|c| {
                        if c.phase() == &ViewPhase::Idle {
                            let result = take_snapshot(c, result);
                            c.seed(result);
                        }
                    });
                    controller.with(|c| render_phase(c.phase(), on_page))
                })}
            </Suspense>
        </div>
    }
}

/// Adopt the server's paging settings and unwrap the catalog.
fn take_snapshot(
    controller: &mut CatalogController,
    result: Result<CatalogSnapshot, ServerFnError>,
) -> Result<ItemPage, CatalogError> {
    result
        .map(|snapshot| {
            controller.set_paging(snapshot.paging);
            snapshot.page
        })
        .map_err(|e| CatalogError::Transport(e.to_string()))
}

fn render_phase(phase: &ViewPhase, on_page: Callback<usize>) -> AnyView {
    match phase {
        ViewPhase::Listing(state) | ViewPhase::Searching(state) => {
            view! { <CatalogGrid state=state.clone() on_page=on_page/> }.into_any()
        }
        ViewPhase::Idle | ViewPhase::Loading => {
            view! { <p class="loading">"Loading…"</p> }.into_any()
        }
    }
}

/// Match count, grid of the displayed items and page controls.
#[component]
fn CatalogGrid(state: ViewState, on_page: Callback<usize>) -> impl IntoView {
    let paging = state.paging();
    let current = state.current_page();
    let total = state.total_pages();
    let found = format!("{} found", state.match_count());
    let items: Vec<Item> = state.displayed_items().to_vec();

    if items.is_empty() {
        let message = if state.is_searching() {
            format!("No creatures found for \"{}\"", state.search_term())
        } else {
            "The catalog is empty.".to_string()
        };
        return view! {
            <p class="search-count">{found}</p>
            <p class="empty">{message}</p>
        }
        .into_any();
    }

    view! {
        <p class="search-count">{found}</p>
        <div class="item-grid">
            <For
                each=move || items.clone()
                key=|item| item.id
                children=move |item: Item| view! { <ItemCard item=item/> }
            />
        </div>
        <Pagination
            current=current
            total=total
            max_buttons=paging.max_page_buttons
            on_select=on_page
        />
    }
    .into_any()
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}
