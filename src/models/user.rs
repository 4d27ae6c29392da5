//! User accounts and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::TeamId;

/// Unique identifier for a user account.
pub type UserId = Uuid;

/// Account role. A closed tag: roles are mutually exclusive and every
/// consumer matches on it explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Director,
    Coach,
    Player,
    Referee,
    Fan,
}

impl Role {
    pub fn description(self) -> &'static str {
        match self {
            Role::Director => "Manage teams, schedule matches, approve challenges.",
            Role::Coach => "Set tactics, line-ups and training.",
            Role::Player => "Track personal stats and the calendar.",
            Role::Referee => "Record match results and reports.",
            Role::Fan => "Follow standings, results and news.",
        }
    }
}

/// A registered account. `team_id` is the optional affiliation: the team a
/// coach/player belongs to, or a fan's club of choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
    pub location: String,
}

impl UserAccount {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        team_id: Option<TeamId>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role,
            team_id,
            location: location.into(),
        }
    }

    /// The identity slice the derivation functions need.
    pub fn viewer(&self) -> Viewer {
        Viewer {
            id: self.id,
            role: self.role,
            team_id: self.team_id,
        }
    }
}

/// The current user as seen by the feed selector: identity, role, and
/// optional team affiliation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: UserId,
    pub role: Role,
    pub team_id: Option<TeamId>,
}
