//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    use dexview_common::config::{self, Config};
    use dexview_web::app::{shell, App, AppState};
    use dexview_web::server::pokeapi::PokeApiClient;

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dexview_web=info,dexview_common=info,tower_http=info".into()
            }),
        )
        .init();

    // ── Configuration ────────────────────────────────────────────────────
    let conf = get_configuration(None).context("Cannot read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    let config_path = Config::path_from_env();
    let config = config::load_or_default(&config_path)?;
    tracing::info!(
        "Catalog upstream {} (page size {}, search limit {:?})",
        config.api_base_url,
        config.page_size,
        config.search_limit,
    );

    let state = AppState {
        client: PokeApiClient::new(&config)?,
        config,
    };

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = leptos_options.clone();
                move || shell(options.clone())
            },
        )
        // Serve static assets (WASM bundle, CSS)
        .nest_service("/pkg", ServeDir::new(format!("{site_root}/pkg")))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("Dexview listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
