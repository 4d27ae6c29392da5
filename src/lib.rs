//! Local league web app: library with models, in-memory store, and derivation logic.

pub mod logic;
pub mod models;
pub mod seed;
pub mod store;

pub use logic::{
    follower_count, following_count, formation_positions, is_following, match_feed, standings,
    team_form, toggle_follow, ContextFilter, FormOutcome, Formation, MatchFeed, StandingsRow,
    StandingsScope, StatusFilter, FORM_LENGTH, REFEREE_ASSIGNMENT_COUNT,
};
pub use models::{
    active, Arena, ArenaId, ChatMessage, MatchEvent, MatchEventKind, MatchId, MatchKind,
    MatchMedia, MatchRecord, MatchStatus, MediaKind, Notification, NotificationId,
    NotificationKind, Player, PlayerId, PlayerStats, Position, Role, SoftDelete, SocialConnection,
    Sport, TacticalPosition, TargetType, Team, TeamId, Tournament, TournamentFormat, TournamentId,
    TournamentStatus, UserAccount, UserId, Viewer,
};
pub use store::{LeagueError, LeagueStore};
