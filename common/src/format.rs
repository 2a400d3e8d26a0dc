//! Identifier formatting and image-asset URLs.

/// Upstream artwork location; `{id}` is replaced by the zero-padded id.
pub const IMAGE_URL_TEMPLATE: &str =
    "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/{id}.png";

/// Shown when the artwork for an item fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Zero-pad an id to at least three digits. Longer ids are kept intact.
pub fn format_id(id: u32) -> String {
    format!("{id:03}")
}

/// Artwork URL for `id` using the default template.
pub fn image_url_for(id: u32) -> String {
    image_url_with(IMAGE_URL_TEMPLATE, id)
}

/// Artwork URL for `id` using a custom template containing `{id}`.
pub fn image_url_with(template: &str, id: u32) -> String {
    template.replace("{id}", &format_id(id))
}

/// Extract the numeric id from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
pub fn parse_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .filter(|&id| id >= 1)
}

/// An image URL paired with the URL to show once the first one fails.
///
/// The renderer keeps a "failed" flag per image and asks [`resolve`] which
/// URL to display instead of rewriting the element itself.
///
/// [`resolve`]: ImageSource::resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub primary: String,
    pub fallback: String,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// Artwork for `id` with the stock placeholder as fallback.
    pub fn for_item(id: u32) -> Self {
        Self::new(image_url_for(id), PLACEHOLDER_IMAGE)
    }

    pub fn resolve(&self, failed: bool) -> &str {
        if failed || self.primary.is_empty() {
            &self.fallback
        } else {
            &self.primary
        }
    }
}
