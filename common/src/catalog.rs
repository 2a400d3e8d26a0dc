//! Catalog data model shared by server and client.

use serde::{Deserialize, Serialize};

use crate::format::format_id;

// ─── List ────────────────────────────────────────────────────────────────────

/// One catalog entry as shown in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub source_url: String,
    pub image_url: String,
}

impl Item {
    /// Case-insensitive substring match on the name, or exact match on the id.
    ///
    /// `needle` must already be lower-cased; `raw` is the term as typed.
    pub fn matches(&self, needle: &str, raw: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_string() == raw
    }

    /// Route to the detail page.
    pub fn href(&self) -> String {
        format!("/items/{}", self.id)
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// `#025`-style label.
    pub fn number_label(&self) -> String {
        format!("#{}", format_id(self.id))
    }
}

/// One fetched batch of items plus the upstream's total count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total_count: usize,
}

impl ItemPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// A single base stat (0–255).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u8,
}

impl Stat {
    /// Bar width in percent of the maximum stat value.
    pub fn percent(&self) -> f32 {
        f32::from(self.value) / 255.0 * 100.0
    }
}

/// Full record for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

impl ItemDetail {
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn number_label(&self) -> String {
        format!("#{}", format_id(self.id))
    }
}

/// Upper-case the first character of each hyphen-separated word.
pub fn capitalize(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
