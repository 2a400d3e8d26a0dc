//! Wire schema of the upstream catalog API (PokeAPI v2) and its mapping
//! onto the shared model.
//!
//! Only the fields the viewer uses are modelled; everything else in the
//! response bodies is ignored by serde.

use serde::Deserialize;

use crate::catalog::{Item, ItemDetail, ItemPage, Stat};
use crate::format::{image_url_with, parse_id_from_url};

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// ─── GET /pokemon?offset=&limit= ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ListResponse {
    /// Convert into an [`ItemPage`].
    ///
    /// Ids come from the resource URL; when that is not parsable the
    /// position in the overall listing (`offset + index + 1`) is used.
    pub fn into_page(self, offset: usize, image_template: &str) -> ItemPage {
        let items = self
            .results
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = parse_id_from_url(&entry.url)
                    .unwrap_or_else(|| (offset + index + 1) as u32);
                Item {
                    id,
                    image_url: image_url_with(image_template, id),
                    name: entry.name,
                    source_url: entry.url,
                }
            })
            .collect();

        ItemPage {
            items,
            total_count: self.count,
        }
    }
}

// ─── GET /pokemon/{id} ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

impl DetailResponse {
    pub fn into_detail(self, image_template: &str) -> ItemDetail {
        ItemDetail {
            id: self.id,
            image_url: image_url_with(image_template, self.id),
            name: self.name,
            height: self.height,
            weight: self.weight,
            types: self.types.into_iter().map(|t| t.kind.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: u8::try_from(s.base_stat).unwrap_or(u8::MAX),
                })
                .collect(),
            abilities: self.abilities.into_iter().map(|a| a.ability.name).collect(),
        }
    }
}
