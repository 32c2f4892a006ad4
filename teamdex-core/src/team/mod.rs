///! Team rosters: export-text parsing, validation, and the persisted store.

pub mod builtin;
pub mod parser;
pub mod store;
pub mod types;

pub use store::{TeamStore, USER_TEAM_PREFIX};
pub use types::{Team, TeamMember};

use crate::error::ValidationError;

/// Maximum number of members a submitted team may carry.
pub const MAX_TEAM_MEMBERS: usize = 6;

/// Check a user submission before it reaches the store. The store itself
/// performs no validation; built-in teams are trusted and never re-checked.
pub fn validate_new_team(name: &str, code: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if code.trim().is_empty() {
        return Err(ValidationError::EmptyCode);
    }
    let count = parser::parse_names(code).len();
    if count == 0 {
        return Err(ValidationError::NoMembers);
    }
    if count > MAX_TEAM_MEMBERS {
        return Err(ValidationError::TooManyMembers { count });
    }
    Ok(())
}
