//! Derivation logic: standings, match feed, team form, social graph, tactics.

mod feed;
mod form;
mod social;
mod standings;
mod tactics;

pub use feed::{
    match_feed, ContextFilter, MatchFeed, StatusFilter, REFEREE_ASSIGNMENT_COUNT,
};
pub use form::{team_form, FormOutcome, FORM_LENGTH};
pub use social::{follower_count, following_count, is_following, toggle_follow};
pub use standings::{standings, StandingsRow, StandingsScope};
pub use tactics::{formation_positions, Formation};
