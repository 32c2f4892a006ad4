///! Team data types.

use serde::{Deserialize, Serialize};

/// A named roster. `code` is the raw export text and stays authoritative;
/// members are re-derived from it every time they are displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// `"default-*"` for built-in teams, `"user-<millis>"` for user teams.
    pub id: String,
    pub name: String,
    /// Raw export-format text, blocks separated by blank lines.
    pub code: String,
    /// Free-text strategy notes; empty when none were provided.
    #[serde(default)]
    pub instructions: String,
}

/// One roster entry parsed out of a team's export code. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    /// Held item, `"None"` when the name line carries no ` @ ` part.
    pub item: String,
    /// `"Unknown"` when the block has no `Ability:` line.
    pub ability: String,
    /// Move names in source order. The member cap is 6; moves are uncapped.
    pub moves: Vec<String>,
}
