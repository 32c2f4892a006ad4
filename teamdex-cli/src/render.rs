///! Text rendering for the team browser commands.
///!
///! The terminal stand-in for the site's cards and detail modal. Pure
///! string builders over the core types so they can be tested with an
///! in-memory store and a fake fetcher.

use anyhow::{bail, Result};
use std::fmt::Write;

use teamdex_core::species::{sprite_url, SpeciesCache, SpeciesFetcher};
use teamdex_core::storage::KvStore;
use teamdex_core::team::parser::{parse_export, parse_names};
use teamdex_core::team::{Team, TeamStore, USER_TEAM_PREFIX};

/// One card per team, name-filtered like the site's search bar
/// (case-insensitive substring match), sprites resolved per member.
pub async fn render_team_list<S: KvStore, F: SpeciesFetcher>(
    store: &TeamStore<S>,
    cache: &SpeciesCache<F>,
    filter: Option<&str>,
) -> String {
    let filter = filter.unwrap_or("").to_lowercase();
    let teams: Vec<&Team> = store
        .list()
        .filter(|team| team.name.to_lowercase().contains(&filter))
        .collect();

    if teams.is_empty() {
        return "No teams found. Try adding one!\n".to_string();
    }

    let mut out = String::new();
    for team in teams {
        let marker = if team.id.starts_with(USER_TEAM_PREFIX) {
            " (user)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}  {}{}", team.id, team.name, marker);

        let names = parse_names(&team.code);
        let records = cache.lookup_all(&names).await;
        for (name, record) in names.iter().zip(records.iter()) {
            let _ = writeln!(out, "    {:<24} {}", name, sprite_url(record.as_ref()));
        }
        out.push('\n');
    }
    out
}

/// Full detail view for one team: instructions, per-member item/ability/
/// moves with sprites, and the raw export code.
pub async fn render_team_details<S: KvStore, F: SpeciesFetcher>(
    store: &TeamStore<S>,
    cache: &SpeciesCache<F>,
    id: &str,
) -> Result<String> {
    let Some(team) = store.get(id) else {
        bail!("No team with id '{}'", id);
    };

    let members = parse_export(&team.code);
    let names: Vec<String> = members.iter().map(|m| m.name.clone()).collect();
    let records = cache.lookup_all(&names).await;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})\n", team.name, team.id);

    let _ = writeln!(out, "Instructions:");
    if team.instructions.is_empty() {
        let _ = writeln!(out, "  No instructions provided.");
    } else {
        let _ = writeln!(out, "  {}", team.instructions);
    }

    let _ = writeln!(out, "\nPokémon Details:");
    for (member, record) in members.iter().zip(records.iter()) {
        let _ = writeln!(out, "  {}  [{}]", member.name, sprite_url(record.as_ref()));
        let _ = writeln!(out, "    Item: {}", member.item);
        let _ = writeln!(out, "    Ability: {}", member.ability);
        let _ = writeln!(out, "    Moves:");
        for mv in &member.moves {
            let _ = writeln!(out, "      - {}", mv);
        }
    }

    let _ = writeln!(out, "\nExport Code:\n{}", team.code);
    Ok(out)
}

/// The live-preview equivalent: names and sprites only, no details.
pub async fn render_preview<F: SpeciesFetcher>(cache: &SpeciesCache<F>, code: &str) -> String {
    let names = parse_names(code);
    if names.is_empty() {
        return "No valid Pokémon found in the provided code.\n".to_string();
    }

    let records = cache.lookup_all(&names).await;
    let mut out = String::new();
    for (name, record) in names.iter().zip(records.iter()) {
        let _ = writeln!(out, "{:<24} {}", name, sprite_url(record.as_ref()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use teamdex_core::species::SpeciesRecord;
    use teamdex_core::storage::MemoryKvStore;

    struct NoSpriteFetcher;

    #[async_trait]
    impl SpeciesFetcher for NoSpriteFetcher {
        async fn fetch(&self, name: &str) -> Result<SpeciesRecord> {
            Err(anyhow::anyhow!("offline, no record for {}", name))
        }
    }

    fn cache() -> SpeciesCache<NoSpriteFetcher> {
        SpeciesCache::new(NoSpriteFetcher)
    }

    #[tokio::test]
    async fn test_list_shows_builtins_with_placeholder_sprites() {
        let store = TeamStore::new(MemoryKvStore::new());
        let out = render_team_list(&store, &cache(), None).await;
        assert!(out.contains("default-1  Gen 9 OU Standard"));
        assert!(out.contains("default-2  Rain Offense"));
        assert!(out.contains("Glimmora"));
        assert!(out.contains("/pokemon/0.png"));
    }

    #[tokio::test]
    async fn test_list_filter_is_case_insensitive() {
        let store = TeamStore::new(MemoryKvStore::new());
        let out = render_team_list(&store, &cache(), Some("rain")).await;
        assert!(out.contains("Rain Offense"));
        assert!(!out.contains("Gen 9 OU Standard"));
    }

    #[tokio::test]
    async fn test_list_no_match_message() {
        let store = TeamStore::new(MemoryKvStore::new());
        let out = render_team_list(&store, &cache(), Some("zzz")).await;
        assert_eq!(out, "No teams found. Try adding one!\n");
    }

    #[tokio::test]
    async fn test_details_render_members_and_code() {
        let mut store = TeamStore::new(MemoryKvStore::new());
        let id = store
            .add(
                "Volt Squad",
                "Pikachu @ Light Ball\nAbility: Static\n- Thunderbolt",
                "",
            )
            .unwrap()
            .id
            .clone();

        let out = render_team_details(&store, &cache(), &id).await.unwrap();
        assert!(out.contains("Volt Squad"));
        assert!(out.contains("No instructions provided."));
        assert!(out.contains("Item: Light Ball"));
        assert!(out.contains("Ability: Static"));
        assert!(out.contains("- Thunderbolt"));
        assert!(out.contains("Export Code:\nPikachu @ Light Ball"));
    }

    #[tokio::test]
    async fn test_details_unknown_id_errors() {
        let store = TeamStore::new(MemoryKvStore::new());
        assert!(render_team_details(&store, &cache(), "user-0")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_preview_empty_code() {
        let out = render_preview(&cache(), "   ").await;
        assert!(out.contains("No valid Pokémon found"));
    }

    #[tokio::test]
    async fn test_preview_lists_names_in_order() {
        let out = render_preview(&cache(), "Zapdos\n\nPelipper @ Damp Rock").await;
        let zapdos = out.find("Zapdos").unwrap();
        let pelipper = out.find("Pelipper").unwrap();
        assert!(zapdos < pelipper);
    }
}
