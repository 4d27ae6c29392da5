//! Team, roster Player, and tactical layout data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SoftDelete;
use crate::models::UserId;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Unique identifier for a roster player.
pub type PlayerId = Uuid;

/// Field position of a roster player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Per-player career counters, mutated as match events reference the player.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub matches_played: u32,
}

/// A roster player. Owned exclusively by one team; has no existence outside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub number: u32,
    pub position: Position,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(name: impl Into<String>, number: u32, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number,
            position,
            stats: PlayerStats::default(),
        }
    }
}

/// A player's spot on the tactics board, in percent of pitch width/height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticalPosition {
    pub player_id: PlayerId,
    pub x: f32,
    pub y: f32,
}

/// A team. Win/draw/loss totals are not stored here: every record shown for a
/// team is derived from finished matches by the standings calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub roster: Vec<Player>,
    /// Default formation shown on the tactics board (may be empty).
    pub formation: Vec<TacticalPosition>,
    pub created_by: UserId,
    pub is_deleted: bool,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        city: impl Into<String>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short_name: short_name.into(),
            city: city.into(),
            roster: Vec::new(),
            formation: Vec::new(),
            created_by,
            is_deleted: false,
        }
    }

    /// Sentinel returned when a referenced team id is not in the store, so
    /// lookups stay total. Carries the requested id and neutral display values.
    pub fn ghost(id: TeamId) -> Self {
        Self {
            id,
            name: "Unknown Team".to_string(),
            short_name: "???".to_string(),
            city: "Unknown".to_string(),
            roster: Vec::new(),
            formation: Vec::new(),
            created_by: Uuid::nil(),
            is_deleted: false,
        }
    }

    /// Mutable roster lookup by player id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id == id)
    }
}

impl SoftDelete for Team {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
