//! Data structures for the league: teams, matches, tournaments, users, social graph.

mod match_record;
mod social;
mod team;
mod tournament;
mod user;

pub use match_record::{
    ChatMessage, MatchEvent, MatchEventKind, MatchId, MatchKind, MatchMedia, MatchRecord,
    MatchStatus, MediaKind, Sport,
};
pub use social::{
    ConnectionId, Notification, NotificationId, NotificationKind, SocialConnection, TargetType,
};
pub use team::{Player, PlayerId, PlayerStats, Position, TacticalPosition, Team, TeamId};
pub use tournament::{Arena, ArenaId, Tournament, TournamentFormat, TournamentId, TournamentStatus};
pub use user::{Role, UserAccount, UserId, Viewer};

/// Soft-deletable records: deletion flips a flag, the record stays in the
/// store so references keep resolving.
pub trait SoftDelete {
    fn is_deleted(&self) -> bool;
}

/// Project the active subset of a collection: records whose soft-delete flag
/// is unset. All derivations consume teams/matches/tournaments through this.
pub fn active<T: SoftDelete>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|t| !t.is_deleted()).collect()
}
