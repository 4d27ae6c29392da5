//! In-memory entity store: flat collections, seeded mock data, total lookups.
//!
//! Single logical writer: callers serialize mutations (the web binary holds
//! the store behind one `RwLock`). Every update replaces a whole record, so
//! readers always see a consistent snapshot. Nothing persists; `reset`
//! reseeds from scratch.

use crate::logic::{formation_positions, toggle_follow, Formation};
use crate::models::{
    active, Arena, ArenaId, ChatMessage, MatchEvent, MatchEventKind, MatchId, MatchMedia,
    MatchRecord, MatchStatus, Notification, NotificationId, NotificationKind, Role,
    SocialConnection, TacticalPosition, TargetType, Team, TeamId, Tournament, TournamentId,
    UserAccount, UserId,
};
use crate::seed;

/// Errors from store mutations. Derivations themselves are total and never
/// produce these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Caller is not allowed to perform this action (e.g. deleting a record
    /// they did not create).
    PermissionDenied,
    /// The record is in a state that rejects this action (e.g. appending
    /// events to a finished match).
    InvalidState,
    /// An account with this email already exists.
    EmailTaken,
    /// No account matches the given id/email (or credentials).
    UserNotFound,
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
    TournamentNotFound(TournamentId),
    NotificationNotFound(NotificationId),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::PermissionDenied => write!(f, "You are not allowed to do that"),
            LeagueError::InvalidState => write!(f, "The record does not allow this action"),
            LeagueError::EmailTaken => write!(f, "This email is already registered"),
            LeagueError::UserNotFound => write!(f, "User not found"),
            LeagueError::MatchNotFound(_) => write!(f, "Match not found"),
            LeagueError::TeamNotFound(_) => write!(f, "Team not found"),
            LeagueError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            LeagueError::NotificationNotFound(_) => write!(f, "Notification not found"),
        }
    }
}

/// The whole league state: raw, soft-deletable collections plus the social
/// graph and notification inbox.
#[derive(Clone, Debug, Default)]
pub struct LeagueStore {
    pub teams: Vec<Team>,
    pub matches: Vec<MatchRecord>,
    pub arenas: Vec<Arena>,
    pub tournaments: Vec<Tournament>,
    pub users: Vec<UserAccount>,
    pub notifications: Vec<Notification>,
    pub social: Vec<SocialConnection>,
}

impl LeagueStore {
    /// An empty store (mostly for tests).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store populated with the mock league data.
    pub fn seeded() -> Self {
        seed::seed_store()
    }

    /// Throw everything away and reseed.
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    // --- Total lookups (ghost fallback, never fail) ---

    /// Team by id; a ghost team carrying the id when unknown. Searches the
    /// raw collection so matches against deleted teams still resolve.
    pub fn team(&self, id: TeamId) -> Team {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .unwrap_or_else(|| Team::ghost(id))
    }

    /// Arena by id; a ghost arena when unknown.
    pub fn arena(&self, id: ArenaId) -> Arena {
        self.arenas
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap_or_else(|| Arena::ghost(id))
    }

    pub fn user(&self, id: UserId) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn match_record(&self, id: MatchId) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.id == id)
    }

    // --- Active projections (soft-delete filtered) ---

    pub fn active_teams(&self) -> Vec<&Team> {
        active(&self.teams)
    }

    pub fn active_matches(&self) -> Vec<&MatchRecord> {
        active(&self.matches)
    }

    pub fn active_tournaments(&self) -> Vec<&Tournament> {
        active(&self.tournaments)
    }

    // --- Accounts ---

    /// Register a new account. Emails are unique.
    pub fn register(&mut self, account: UserAccount) -> Result<UserId, LeagueError> {
        if self.users.iter().any(|u| u.email == account.email) {
            return Err(LeagueError::EmailTaken);
        }
        let id = account.id;
        self.users.push(account);
        Ok(id)
    }

    /// Credential check: email + password lookup.
    pub fn login(&self, email: &str, password: &str) -> Result<&UserAccount, LeagueError> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(LeagueError::UserNotFound)
    }

    /// Replace an account record (profile edit).
    pub fn update_user(&mut self, account: UserAccount) -> Result<(), LeagueError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == account.id)
            .ok_or(LeagueError::UserNotFound)?;
        *slot = account;
        Ok(())
    }

    // --- Teams / arenas / tournaments ---

    pub fn create_team(&mut self, team: Team) -> TeamId {
        let id = team.id;
        self.teams.push(team);
        id
    }

    /// Whole-record replacement of a team.
    pub fn update_team(&mut self, team: Team) -> Result<(), LeagueError> {
        let slot = self
            .teams
            .iter_mut()
            .find(|t| t.id == team.id)
            .ok_or(LeagueError::TeamNotFound(team.id))?;
        *slot = team;
        Ok(())
    }

    pub fn create_arena(&mut self, arena: Arena) -> ArenaId {
        let id = arena.id;
        self.arenas.push(arena);
        id
    }

    pub fn create_tournament(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.push(tournament);
        id
    }

    // --- Matches ---

    /// Insert a new match or replace an existing one by id.
    pub fn save_match(&mut self, record: MatchRecord) -> MatchId {
        let id = record.id;
        match self.matches.iter_mut().find(|m| m.id == id) {
            Some(slot) => *slot = record,
            None => self.matches.push(record),
        }
        id
    }

    /// Set scores and status directly (referee's score sheet). Rejected once
    /// the match is finished: finished scores are immutable standings inputs.
    pub fn update_score(
        &mut self,
        match_id: MatchId,
        home_score: u32,
        away_score: u32,
        status: MatchStatus,
    ) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        if m.status == MatchStatus::Finished {
            return Err(LeagueError::InvalidState);
        }
        m.home_score = home_score;
        m.away_score = away_score;
        m.status = status;
        Ok(())
    }

    /// Append a live event to a match and apply its effects: Start puts the
    /// match live (and counts an appearance for the named player), a Goal
    /// bumps the scoring side and the scorer, cards bump the player's
    /// counters, End finishes the match.
    pub fn record_event(
        &mut self,
        match_id: MatchId,
        mut event: MatchEvent,
    ) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        if m.status == MatchStatus::Finished {
            return Err(LeagueError::InvalidState);
        }

        if event.kind == MatchEventKind::Goal {
            if let Some(team_id) = event.team_id {
                if team_id == m.home_team_id {
                    m.home_score += 1;
                }
                if team_id == m.away_team_id {
                    m.away_score += 1;
                }
            }
        }
        m.status = match event.kind {
            MatchEventKind::End => MatchStatus::Finished,
            _ => MatchStatus::Live,
        };

        let player_ref = event.team_id.zip(event.player_id);
        if let Some((team_id, player_id)) = player_ref {
            if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
                if let Some(player) = team.get_player_mut(player_id) {
                    match event.kind {
                        MatchEventKind::Goal => player.stats.goals += 1,
                        MatchEventKind::YellowCard => player.stats.yellow_cards += 1,
                        MatchEventKind::RedCard => player.stats.red_cards += 1,
                        MatchEventKind::Start => player.stats.matches_played += 1,
                        MatchEventKind::End => {}
                    }
                    event.player_name = Some(player.name.clone());
                }
            }
        }

        // Re-borrow: the event log append comes after the roster update.
        if let Some(m) = self.matches.iter_mut().find(|m| m.id == match_id) {
            m.events.push(event);
        }
        Ok(())
    }

    pub fn send_chat(&mut self, match_id: MatchId, message: ChatMessage) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        m.chat.push(message);
        Ok(())
    }

    pub fn add_media(&mut self, match_id: MatchId, media: MatchMedia) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        m.media.push(media);
        Ok(())
    }

    // --- Tactics ---

    /// Store a per-match layout for whichever side the team plays.
    pub fn set_match_tactics(
        &mut self,
        match_id: MatchId,
        team_id: TeamId,
        positions: Vec<TacticalPosition>,
    ) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        if team_id == m.home_team_id {
            m.home_tactics = Some(positions);
            Ok(())
        } else if team_id == m.away_team_id {
            m.away_tactics = Some(positions);
            Ok(())
        } else {
            Err(LeagueError::InvalidState)
        }
    }

    pub fn set_team_formation(
        &mut self,
        team_id: TeamId,
        positions: Vec<TacticalPosition>,
    ) -> Result<(), LeagueError> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        team.formation = positions;
        Ok(())
    }

    /// Lay the team's roster out in a standard preset and store it as the
    /// team's default formation.
    pub fn apply_formation_preset(
        &mut self,
        team_id: TeamId,
        formation: Formation,
    ) -> Result<(), LeagueError> {
        let roster: Vec<_> = self
            .teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?
            .roster
            .iter()
            .map(|p| p.id)
            .collect();
        self.set_team_formation(team_id, formation_positions(formation, &roster))
    }

    // --- Soft deletes (creator-only) ---

    pub fn delete_match(&mut self, match_id: MatchId, by: UserId) -> Result<(), LeagueError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        if m.created_by != by {
            return Err(LeagueError::PermissionDenied);
        }
        m.is_deleted = true;
        Ok(())
    }

    pub fn delete_team(&mut self, team_id: TeamId, by: UserId) -> Result<(), LeagueError> {
        let t = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        if t.created_by != by {
            return Err(LeagueError::PermissionDenied);
        }
        t.is_deleted = true;
        Ok(())
    }

    pub fn delete_tournament(
        &mut self,
        tournament_id: TournamentId,
        by: UserId,
    ) -> Result<(), LeagueError> {
        let t = self
            .tournaments
            .iter_mut()
            .find(|t| t.id == tournament_id)
            .ok_or(LeagueError::TournamentNotFound(tournament_id))?;
        if t.created_by != by {
            return Err(LeagueError::PermissionDenied);
        }
        t.is_deleted = true;
        Ok(())
    }

    // --- Social graph ---

    /// Toggle a follow edge. Returns true when the follower follows the
    /// target afterwards.
    pub fn toggle_follow(
        &mut self,
        follower: UserId,
        target: uuid::Uuid,
        target_type: TargetType,
    ) -> bool {
        toggle_follow(&mut self.social, follower, target, target_type)
    }

    // --- Notifications / invites ---

    /// Invite the account behind `email` to join a team. Only a director or
    /// the team's creator may send one.
    pub fn send_team_invite(
        &mut self,
        from: UserId,
        team_id: TeamId,
        email: &str,
    ) -> Result<NotificationId, LeagueError> {
        let (from_name, from_role) = {
            let sender = self.user(from).ok_or(LeagueError::UserNotFound)?;
            (sender.name.clone(), sender.role)
        };
        let team = self.team(team_id);
        if from_role != Role::Director && team.created_by != from {
            return Err(LeagueError::PermissionDenied);
        }
        let to = self
            .users
            .iter()
            .find(|u| u.email == email)
            .ok_or(LeagueError::UserNotFound)?
            .id;
        let notif = Notification::team_invite(from, from_name, to, team_id, team.name);
        let id = notif.id;
        self.notifications.push(notif);
        Ok(id)
    }

    /// Invite a team into a tournament. The notification goes to the team's
    /// creator (its director).
    pub fn send_tournament_invite(
        &mut self,
        from: UserId,
        tournament_id: TournamentId,
        team_id: TeamId,
    ) -> Result<NotificationId, LeagueError> {
        let from_name = self
            .user(from)
            .map(|u| u.name.clone())
            .ok_or(LeagueError::UserNotFound)?;
        let tournament = self
            .tournament(tournament_id)
            .ok_or(LeagueError::TournamentNotFound(tournament_id))?;
        let tournament_name = tournament.name.clone();
        let team = self.team(team_id);
        let owner = self
            .user(team.created_by)
            .ok_or(LeagueError::UserNotFound)?
            .id;
        let notif = Notification::tournament_invite(
            from,
            from_name,
            owner,
            team_id,
            team.name,
            tournament_id,
            tournament_name,
        );
        let id = notif.id;
        self.notifications.push(notif);
        Ok(id)
    }

    /// Unread inbox for a user.
    pub fn unread_notifications(&self, user: UserId) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.to_user_id == user && !n.is_read)
            .collect()
    }

    /// Accept an invite addressed to `user`: a team invite sets the user's
    /// affiliation, a tournament invite enrols the team. Either way the
    /// notification is marked read (not deleted).
    pub fn accept_notification(
        &mut self,
        notification_id: NotificationId,
        user: UserId,
    ) -> Result<(), LeagueError> {
        let notif = self
            .notifications
            .iter()
            .find(|n| n.id == notification_id)
            .cloned()
            .ok_or(LeagueError::NotificationNotFound(notification_id))?;
        if notif.to_user_id != user {
            return Err(LeagueError::PermissionDenied);
        }

        match notif.kind {
            NotificationKind::TeamInvite => {
                let account = self
                    .users
                    .iter_mut()
                    .find(|u| u.id == user)
                    .ok_or(LeagueError::UserNotFound)?;
                account.team_id = notif.team_id;
            }
            NotificationKind::TournamentInvite => {
                if let (Some(tournament_id), Some(team_id)) = (notif.tournament_id, notif.team_id) {
                    let tournament = self
                        .tournaments
                        .iter_mut()
                        .find(|t| t.id == tournament_id)
                        .ok_or(LeagueError::TournamentNotFound(tournament_id))?;
                    if !tournament.participating_team_ids.contains(&team_id) {
                        tournament.participating_team_ids.push(team_id);
                    }
                }
            }
        }

        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == notification_id) {
            n.is_read = true;
        }
        Ok(())
    }

    /// Whether the user may manage league records (create matches,
    /// tournaments, arenas).
    pub fn can_manage(&self, user: UserId) -> bool {
        self.user(user).map_or(false, |u| u.role == Role::Director)
    }
}
