//! Social graph edges and notifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use crate::models::user::UserId;

/// Unique identifier for a follow edge.
pub type ConnectionId = Uuid;

/// Unique identifier for a notification.
pub type NotificationId = Uuid;

/// What a follow edge points at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Team,
    User,
}

/// A directed follow edge. At most one edge exists per (follower, target)
/// pair; the toggle operation enforces this.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SocialConnection {
    pub id: ConnectionId,
    pub follower_id: UserId,
    pub target_id: Uuid,
    pub target_type: TargetType,
}

impl SocialConnection {
    pub fn new(follower_id: UserId, target_id: Uuid, target_type: TargetType) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower_id,
            target_id,
            target_type,
        }
    }
}

/// Type of invite carried by a notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TeamInvite,
    TournamentInvite,
}

/// A directed invite message. Accepting applies its effect and marks it
/// read; it is never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub from_id: UserId,
    pub from_name: String,
    pub to_user_id: UserId,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub tournament_id: Option<TournamentId>,
    pub tournament_name: Option<String>,
    pub is_read: bool,
}

impl Notification {
    /// Invite a user (by account) to join a team.
    pub fn team_invite(
        from_id: UserId,
        from_name: impl Into<String>,
        to_user_id: UserId,
        team_id: TeamId,
        team_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::TeamInvite,
            from_id,
            from_name: from_name.into(),
            to_user_id,
            team_id: Some(team_id),
            team_name: Some(team_name.into()),
            tournament_id: None,
            tournament_name: None,
            is_read: false,
        }
    }

    /// Invite a team (via its owning director) into a tournament.
    pub fn tournament_invite(
        from_id: UserId,
        from_name: impl Into<String>,
        to_user_id: UserId,
        team_id: TeamId,
        team_name: impl Into<String>,
        tournament_id: TournamentId,
        tournament_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::TournamentInvite,
            from_id,
            from_name: from_name.into(),
            to_user_id,
            team_id: Some(team_id),
            team_name: Some(team_name.into()),
            tournament_id: Some(tournament_id),
            tournament_name: Some(tournament_name.into()),
            is_read: false,
        }
    }
}
