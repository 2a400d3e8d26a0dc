//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, SsrMode,
};

use crate::components::nav::Nav;
use crate::pages::{catalog::CatalogPage, item::ItemDetailPage};

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub client: crate::server::pokeapi::PokeApiClient,
    pub config: dexview_common::config::Config,
}

/// HTML document wrapping [`App`] for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dexview-web.css"/>
        <Title text="Dexview – Creature Catalog"/>
        <Meta name="description" content="Browse and search the creature catalog"/>

        <Router>
            <Nav/>
            <main class="main-content">
                <Routes fallback=|| view! { <p class="error">"Page not found."</p> }>
                    <Route path=path!("/") view=CatalogPage/>
                    <Route path=path!("/items/:id") view=ItemDetailPage ssr=SsrMode::Async/>
                </Routes>
            </main>
        </Router>
    }
}
