///! Persisted team store.
///!
///! Owns the user-team collection and its persisted encoding. Built-in
///! teams come first in every listing and are untouchable; user teams are
///! serialized as one JSON array and rewritten wholesale on every mutation.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, warn};

use crate::storage::{KvStore, USER_TEAMS_KEY};
use crate::team::builtin::builtin_teams;
use crate::team::types::Team;

/// Id prefix marking a team as user-owned and therefore deletable.
pub const USER_TEAM_PREFIX: &str = "user-";

pub struct TeamStore<S: KvStore> {
    builtin: Vec<Team>,
    user: Vec<Team>,
    storage: S,
}

impl<S: KvStore> TeamStore<S> {
    /// Build a store over the given storage port, loading any persisted
    /// user teams. A missing, unreadable, or corrupted persisted value
    /// yields an empty user collection, never a failure.
    pub fn new(storage: S) -> Self {
        let user = load_persisted(&storage);
        Self {
            builtin: builtin_teams(),
            user,
            storage,
        }
    }

    /// All teams in display order: built-ins first, then user teams, each
    /// group in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Team> {
        self.builtin.iter().chain(self.user.iter())
    }

    /// Look up a team (built-in or user) by id.
    pub fn get(&self, id: &str) -> Option<&Team> {
        self.list().find(|team| team.id == id)
    }

    /// Append a new user team and persist the full user collection.
    ///
    /// The store performs no validation; callers run
    /// [`crate::team::validate_new_team`] first. A persistence failure
    /// propagates — silently losing the team would be worse.
    pub fn add(&mut self, name: &str, code: &str, instructions: &str) -> Result<&Team> {
        let team = Team {
            // Millisecond timestamps are distinguishable enough here;
            // rapid successive adds colliding is accepted, not mitigated.
            id: format!("{}{}", USER_TEAM_PREFIX, Utc::now().timestamp_millis()),
            name: name.to_string(),
            code: code.to_string(),
            instructions: instructions.to_string(),
        };
        debug!("Adding user team '{}' as {}", team.name, team.id);
        self.user.push(team);
        self.save_user_teams()?;
        Ok(self.user.last().unwrap())
    }

    /// Remove the user team with the given id, persisting the change.
    /// Returns whether anything was removed; an unknown id is a no-op, and
    /// ids without the user prefix (built-ins included) are never eligible.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if !id.starts_with(USER_TEAM_PREFIX) {
            debug!("Ignoring delete of non-user team id '{}'", id);
            return Ok(false);
        }
        let before = self.user.len();
        self.user.retain(|team| team.id != id);
        if self.user.len() == before {
            return Ok(false);
        }
        self.save_user_teams()?;
        Ok(true)
    }

    fn save_user_teams(&self) -> Result<()> {
        let encoded =
            serde_json::to_string(&self.user).context("Failed to serialize user teams")?;
        self.storage.save(USER_TEAMS_KEY, &encoded)
    }
}

/// Decode the persisted user-team array, dropping malformed entries rather
/// than failing the whole load. Corrupt state costs the user collection,
/// not the application.
fn load_persisted<S: KvStore>(storage: &S) -> Vec<Team> {
    let raw = match storage.load(USER_TEAMS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read persisted user teams: {:#}", e);
            return Vec::new();
        }
    };

    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Persisted user teams are unparsable, starting empty: {}", e);
            return Vec::new();
        }
    };

    let total = entries.len();
    let teams: Vec<Team> = entries
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Team>(value) {
            Ok(team) => Some(team),
            Err(e) => {
                warn!("Dropping malformed persisted team entry: {}", e);
                None
            }
        })
        .collect();
    debug!("Loaded {} of {} persisted user teams", teams.len(), total);
    teams
}
