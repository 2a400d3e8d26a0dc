//! Item detail page – artwork, measurements, types, stats and abilities.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use dexview_common::catalog::ItemDetail;
use dexview_common::format::{ImageSource, PLACEHOLDER_IMAGE};

use crate::components::stat_bar::StatBar;

// ─── Server functions ────────────────────────────────────────────────────────

/// Look up one item. Any upstream failure is reported as "not found".
#[server]
pub async fn get_item_detail(id: u32) -> Result<Option<ItemDetail>, ServerFnError> {
    use dexview_common::error::found_or_none;

    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    Ok(found_or_none(state.client.get_detail(id).await))
}

// ─── Page component ──────────────────────────────────────────────────────────

/// Detail page addressed by `/items/:id`.
#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));

    let detail = Resource::new(item_id, |id| async move {
        match id {
            Some(id) => get_item_detail(id).await,
            None => Ok(None),
        }
    });

    view! {
        <div class="item-page">
            <a href="/" class="back-link">"← Back to list"</a>

            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || detail.get().map(|res| {
                    let found = match res {
                        Ok(found) => found,
                        Err(e) => {
                            tracing::warn!("Detail request failed: {e}");
                            None
                        }
                    };
                    match found {
                        Some(detail) => view! { <DetailView detail=detail/> }.into_any(),
                        None => {
                            mark_not_found();
                            view! { <p class="error">"Creature not found."</p> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

/// Detail content (factored out for clarity).
#[component]
fn DetailView(detail: ItemDetail) -> impl IntoView {
    let image = ImageSource::new(detail.image_url.clone(), PLACEHOLDER_IMAGE);
    let failed = RwSignal::new(false);

    let title = detail.display_name();
    let alt = title.clone();
    let number = detail.number_label();
    let height = format!("{:.1} m", detail.height_m());
    let weight = format!("{:.1} kg", detail.weight_kg());

    let types = detail
        .types
        .iter()
        .map(|t| view! { <span class="type-badge">{t.clone()}</span> })
        .collect_view();
    let stats = detail
        .stats
        .into_iter()
        .map(|stat| view! { <StatBar stat=stat/> })
        .collect_view();
    let abilities = detail
        .abilities
        .into_iter()
        .map(|a| view! { <span class="ability-badge">{a}</span> })
        .collect_view();

    view! {
        <div class="item-detail">
            <div class="item-hero">
                <img
                    src=move || image.resolve(failed.get()).to_string()
                    alt=alt
                    class="item-hero-img"
                    width="400"
                    height="400"
                    on:error=move |_| failed.set(true)
                />
            </div>
            <div class="item-info">
                <h1 class="item-title">
                    {title} " " <span class="item-number">{number}</span>
                </h1>
                <div class="item-facts">
                    <div><strong>"Height: "</strong>{height}</div>
                    <div><strong>"Weight: "</strong>{weight}</div>
                    <div><strong>"Types: "</strong>{types}</div>
                </div>

                <section class="item-stats">
                    <h3>"Stats"</h3>
                    {stats}
                </section>

                <section class="item-abilities">
                    <h3>"Abilities"</h3>
                    <div class="ability-list">{abilities}</div>
                </section>
            </div>
        </div>
    }
}

/// Answer 404 when the lookup missed during server rendering.
fn mark_not_found() {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }
}
