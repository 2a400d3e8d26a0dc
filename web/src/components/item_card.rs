//! Catalog card with artwork, name and a link to the detail page.

use leptos::prelude::*;

use dexview_common::catalog::Item;
use dexview_common::format::{ImageSource, PLACEHOLDER_IMAGE};

/// A compact card for one catalog item.
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let image = ImageSource::new(item.image_url.clone(), PLACEHOLDER_IMAGE);
    // Flipped by the <img> error event; the card then shows the placeholder.
    let failed = RwSignal::new(false);

    view! {
        <div class="item-card">
            <div class="item-img-wrap">
                <img
                    src=move || image.resolve(failed.get()).to_string()
                    alt=item.name.clone()
                    class="item-img"
                    width="200"
                    height="200"
                    loading="lazy"
                    on:error=move |_| failed.set(true)
                />
            </div>
            <div class="item-card-body">
                <span class="item-number">{item.number_label()}</span>
                <h2 class="item-name">{item.display_name()}</h2>
                <a href=item.href() class="detail-button">"Detail"</a>
            </div>
        </div>
    }
}
