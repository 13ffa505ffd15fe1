//! Wire models for the PokeAPI-compatible catalog endpoints.
//!
//! Unknown response fields are ignored on decode; the detail endpoint in
//! particular carries far more than the subset modelled here.

use serde::Deserialize;

/// A catalog entry from the list endpoint.
///
/// Identity is the `name` field; `url` points at the per-entry detail
/// resource. Entries are immutable once fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub url: String,
}

impl Pokemon {
    /// Human-facing name: first letter upper-cased.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Pokemon {}

/// One page of the paginated list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPage {
    /// Total number of entries in the catalog
    pub count: u32,
    /// Link to the next page, absent on the last page
    pub next: Option<String>,
    /// Link to the previous page, absent on the first page
    pub previous: Option<String>,
    /// Entries in this page, in catalog order
    pub results: Vec<Pokemon>,
}

impl PokemonPage {
    /// Whether the server reports another page after this one.
    ///
    /// Informational only: pagination offsets are always derived from the
    /// accumulated item count, never from these links.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Detail payload for a single entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
}

impl PokemonDetail {
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Comma-joined, capitalized type names in slot order.
    pub fn types_line(&self) -> String {
        self.types
            .iter()
            .map(|t| capitalize(&t.type_ref.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A typed slot in the detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// Nested type metadata, used only for display.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub url: String,
}

/// Sprite metadata, used only for display.
#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
