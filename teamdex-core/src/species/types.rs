///! Species reference data decoded from the remote service.

use serde::Deserialize;

/// Placeholder sprite shown when a species has no record or no sprite
/// (the PokeAPI "MissingNo." image).
pub const MISSING_SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/0.png";

/// The subset of the `/pokemon/{name}` payload we keep. Immutable once
/// fetched; cached for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub sprites: SpriteSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

/// Sprite URL for a lookup result, falling back to the placeholder when
/// the record is absent or carries no default sprite.
pub fn sprite_url(record: Option<&SpeciesRecord>) -> &str {
    record
        .and_then(|r| r.sprites.front_default.as_deref())
        .unwrap_or(MISSING_SPRITE_URL)
}
