//! Tournament and Arena data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::match_record::Sport;
use crate::models::team::TeamId;
use crate::models::SoftDelete;
use crate::models::UserId;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for an arena.
pub type ArenaId = Uuid;

/// Competition format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    League,
    Knockout,
}

/// Whether the tournament is still running.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Active,
    Closed,
}

/// A championship: a named scope of matches between participating teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub sport: Sport,
    pub status: TournamentStatus,
    pub current_round: u32,
    pub total_rounds: u32,
    pub participating_team_ids: Vec<TeamId>,
    pub created_by: UserId,
    pub is_deleted: bool,
}

impl Tournament {
    pub fn new(
        name: impl Into<String>,
        format: TournamentFormat,
        sport: Sport,
        total_rounds: u32,
        created_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            sport,
            status: TournamentStatus::Active,
            current_round: 1,
            total_rounds: total_rounds.max(1),
            participating_team_ids: Vec::new(),
            created_by,
            is_deleted: false,
        }
    }

    /// Progress through the rounds as a percentage, clamped to 0-100.
    pub fn progress_percent(&self) -> u32 {
        if self.total_rounds == 0 {
            return 0;
        }
        (self.current_round * 100 / self.total_rounds).min(100)
    }
}

impl SoftDelete for Tournament {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// A venue. Not soft-deletable; referenced from matches by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub id: ArenaId,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Arena {
    pub fn new(name: impl Into<String>, address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            lat,
            lng,
        }
    }

    /// Sentinel for dangling arena ids, so lookups stay total.
    pub fn ghost(id: ArenaId) -> Self {
        Self {
            id,
            name: "Unknown Venue".to_string(),
            address: String::new(),
            lat: 0.0,
            lng: 0.0,
        }
    }
}
