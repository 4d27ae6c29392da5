//! Match data structures: status, kind, event log, chat, and media.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::{PlayerId, TeamId};
use crate::models::SoftDelete;
use crate::models::{ArenaId, TacticalPosition, TournamentId, UserId};

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Lifecycle of a match. Once `Finished`, scores are immutable inputs to
/// the standings calculator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    WaitingAcceptance,
    Live,
    Finished,
}

/// Competitive context of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Friendly,
    League,
    Knockout,
}

/// Sport variant (differs only in label and squad size for display).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Futsal,
    Fut6,
    Fut7,
    Fut8,
    Amateur,
    Professional,
}

impl Sport {
    pub fn label(self) -> &'static str {
        match self {
            Sport::Futsal => "Futsal",
            Sport::Fut6 => "Fut6",
            Sport::Fut7 => "Fut7 Society",
            Sport::Fut8 => "Fut8",
            Sport::Amateur => "Amateur (11-a-side)",
            Sport::Professional => "Professional",
        }
    }

    pub fn players_per_side(self) -> u32 {
        match self {
            Sport::Futsal => 5,
            Sport::Fut6 => 6,
            Sport::Fut7 => 7,
            Sport::Fut8 => 8,
            Sport::Amateur | Sport::Professional => 11,
        }
    }
}

/// What happened at a given minute of a live match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEventKind {
    Start,
    Goal,
    YellowCard,
    RedCard,
    End,
}

/// One entry in a match's ordered event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: Uuid,
    pub kind: MatchEventKind,
    pub minute: u32,
    pub team_id: Option<TeamId>,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
}

impl MatchEvent {
    pub fn new(kind: MatchEventKind, minute: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            minute,
            team_id: None,
            player_id: None,
            player_name: None,
        }
    }

    pub fn for_player(
        kind: MatchEventKind,
        minute: u32,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Self {
        Self {
            team_id: Some(team_id),
            player_id: Some(player_id),
            ..Self::new(kind, minute)
        }
    }
}

/// A message in a match's chat log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: UserId,
    pub user_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub team_id: Option<TeamId>,
}

/// Kind of an attached media item.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Photo/video attached to a match after the fact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchMedia {
    pub id: Uuid,
    pub kind: MediaKind,
    pub url: String,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

/// A scheduled or played match. References teams/arena/tournament by id
/// (non-owning; the store resolves dangling ids to ghost entities).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: DateTime<Utc>,
    pub arena_id: ArenaId,
    pub status: MatchStatus,
    pub kind: MatchKind,
    pub sport: Sport,
    pub tournament_id: Option<TournamentId>,
    pub round: Option<String>,
    pub home_score: u32,
    pub away_score: u32,
    pub events: Vec<MatchEvent>,
    pub chat: Vec<ChatMessage>,
    pub home_tactics: Option<Vec<TacticalPosition>>,
    pub away_tactics: Option<Vec<TacticalPosition>>,
    pub media: Vec<MatchMedia>,
    pub created_by: UserId,
    pub is_deleted: bool,
}

impl MatchRecord {
    pub fn new(
        home_team_id: TeamId,
        away_team_id: TeamId,
        date: DateTime<Utc>,
        arena_id: ArenaId,
        kind: MatchKind,
        sport: Sport,
        created_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            date,
            arena_id,
            status: MatchStatus::Scheduled,
            kind,
            sport,
            tournament_id: None,
            round: None,
            home_score: 0,
            away_score: 0,
            events: Vec::new(),
            chat: Vec::new(),
            home_tactics: None,
            away_tactics: None,
            media: Vec::new(),
            created_by,
            is_deleted: false,
        }
    }

    /// Whether the given team plays in this match (home or away).
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

impl SoftDelete for MatchRecord {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
