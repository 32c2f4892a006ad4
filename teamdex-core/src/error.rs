///! Validation error taxonomy for user-submitted teams.

use thiserror::Error;

/// A rule violated by a team submission. The core never renders these;
/// the presentation layer displays the message next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team export code cannot be empty")]
    EmptyCode,

    #[error("No valid Pokémon found in the provided code")]
    NoMembers,

    #[error("Too many Pokémon ({count}). A team can have at most 6 Pokémon")]
    TooManyMembers { count: usize },
}
