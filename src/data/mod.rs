//! Catalog data models and the cache-aside client that produces them
//!
//! This module contains the decoded shapes handed back to callers (area
//! listings, area details, entity details), the transport seam used to fetch
//! raw bodies, and the client that ties the transport to the response cache.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod pagination;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Direction, FetchError};
pub use fetcher::{Fetch, HttpFetcher};
pub use pagination::Pagination;

use serde::Deserialize;

/// One page of a named-resource listing
///
/// `next` and `previous` are absolute URLs to feed back into the next call;
/// either is `None` at the matching end of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "NamedResourcePage")]
pub struct AreaList {
    /// Cursor for the following page
    pub next: Option<String>,
    /// Cursor for the preceding page
    pub previous: Option<String>,
    /// Resource names on this page, in upstream order
    pub names: Vec<String>,
}

/// Entity listings share the page shape of area listings
pub type EntityList = AreaList;

/// A single location area and the entities that can be encountered there
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "LocationAreaResponse")]
pub struct AreaDetail {
    /// Area name as reported upstream
    pub name: String,
    /// Names of encounterable entities, in upstream order
    pub encounters: Vec<String>,
}

/// A single entity's vital statistics
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PokemonResponse")]
pub struct EntityDetail {
    pub name: String,
    /// Experience granted for defeating this entity
    pub base_experience: u32,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub species: String,
    /// Base stats, in upstream order
    pub stats: Vec<StatValue>,
    /// Type names, in slot order
    pub types: Vec<String>,
}

/// A named base stat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

// Wire formats. These mirror the upstream JSON and are only used as
// deserialization targets for the public shapes above.

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamedResourcePage {
    next: Option<String>,
    previous: Option<String>,
    results: Vec<NamedResource>,
}

impl From<NamedResourcePage> for AreaList {
    fn from(page: NamedResourcePage) -> Self {
        Self {
            next: page.next,
            previous: page.previous,
            names: page.results.into_iter().map(|r| r.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocationAreaResponse {
    #[serde(default)]
    name: String,
    pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Deserialize)]
struct PokemonEncounter {
    pokemon: NamedResource,
}

impl From<LocationAreaResponse> for AreaDetail {
    fn from(response: LocationAreaResponse) -> Self {
        Self {
            name: response.name,
            encounters: response
                .pokemon_encounters
                .into_iter()
                .map(|e| e.pokemon.name)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    #[serde(default)]
    name: String,
    /// Null upstream for some entities
    base_experience: Option<u32>,
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    species: Option<NamedResource>,
    #[serde(default)]
    stats: Vec<PokemonStat>,
    #[serde(default)]
    types: Vec<PokemonType>,
}

#[derive(Debug, Deserialize)]
struct PokemonStat {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonType {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

impl From<PokemonResponse> for EntityDetail {
    fn from(response: PokemonResponse) -> Self {
        let mut types = response.types;
        types.sort_by_key(|t| t.slot);

        Self {
            name: response.name,
            base_experience: response.base_experience.unwrap_or(0),
            height: response.height,
            weight: response.weight,
            species: response.species.map(|s| s.name).unwrap_or_default(),
            stats: response
                .stats
                .into_iter()
                .map(|s| StatValue {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            types: types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}
