///! Remote species data: PokeAPI client and the memoizing lookup cache.

pub mod cache;
pub mod client;
pub mod types;

pub use cache::SpeciesCache;
pub use client::{PokeApiClient, SpeciesFetcher};
pub use types::{sprite_url, SpeciesRecord, MISSING_SPRITE_URL};
