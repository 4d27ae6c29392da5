//! Integration tests for the in-memory store: lifecycle, lookups, mutations.

use chrono::Utc;
use local_league_web::{
    LeagueError, LeagueStore, Formation, MatchEvent, MatchEventKind, MatchKind, MatchRecord,
    MatchStatus, Player, Position, Role, Sport, TargetType, Team, Tournament, TournamentFormat,
    UserAccount,
};
use uuid::Uuid;

fn director(store: &mut LeagueStore) -> Uuid {
    let account = UserAccount::new(
        "director@example.com",
        "secret",
        "The Director",
        Role::Director,
        None,
        "Testville",
    );
    store.register(account).unwrap()
}

fn team_with_roster(store: &mut LeagueStore, owner: Uuid, name: &str) -> Uuid {
    let mut team = Team::new(name, "TST", "Testville", owner);
    team.roster = (0..11)
        .map(|j| {
            let position = if j == 0 {
                Position::Goalkeeper
            } else {
                Position::Midfielder
            };
            Player::new(format!("{name} {j}"), j + 1, position)
        })
        .collect();
    store.create_team(team)
}

fn scheduled_match(store: &mut LeagueStore, owner: Uuid, home: Uuid, away: Uuid) -> Uuid {
    let record = MatchRecord::new(
        home,
        away,
        Utc::now(),
        Uuid::new_v4(),
        MatchKind::Friendly,
        Sport::Fut7,
        owner,
    );
    store.save_match(record)
}

#[test]
fn seeded_store_has_the_expected_shape() {
    let store = LeagueStore::seeded();
    assert_eq!(store.teams.len(), 20);
    assert_eq!(store.matches.len(), 40);
    assert_eq!(store.tournaments.len(), 5);
    assert_eq!(store.arenas.len(), 10);
    assert_eq!(store.users.len(), 100);
    assert!(store.social.is_empty());
    assert!(store.notifications.is_empty());

    let finished = store
        .matches
        .iter()
        .filter(|m| m.status == MatchStatus::Finished)
        .count();
    assert_eq!(finished, 20);
    assert!(store.users.iter().any(|u| u.role == Role::Referee));
    for t in &store.tournaments {
        assert_eq!(t.participating_team_ids.len(), 4);
    }
}

#[test]
fn unknown_ids_resolve_to_ghosts() {
    let store = LeagueStore::empty();
    let id = Uuid::new_v4();
    let ghost = store.team(id);
    assert_eq!(ghost.id, id);
    assert_eq!(ghost.name, "Unknown Team");

    let arena = store.arena(id);
    assert_eq!(arena.id, id);
    assert_eq!(arena.name, "Unknown Venue");
}

#[test]
fn register_rejects_duplicate_email() {
    let mut store = LeagueStore::empty();
    director(&mut store);
    let dup = UserAccount::new(
        "director@example.com",
        "other",
        "Clone",
        Role::Fan,
        None,
        "Elsewhere",
    );
    assert_eq!(store.register(dup), Err(LeagueError::EmailTaken));
}

#[test]
fn login_checks_both_email_and_password() {
    let mut store = LeagueStore::empty();
    director(&mut store);
    assert!(store.login("director@example.com", "secret").is_ok());
    assert!(store.login("director@example.com", "wrong").is_err());
    assert!(store.login("nobody@example.com", "secret").is_err());
}

#[test]
fn goal_event_updates_score_player_stats_and_log() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let home = team_with_roster(&mut store, owner, "Home");
    let away = team_with_roster(&mut store, owner, "Away");
    let match_id = scheduled_match(&mut store, owner, home, away);
    let scorer = store.team(home).roster[3].id;

    store
        .record_event(match_id, MatchEvent::new(MatchEventKind::Start, 0))
        .unwrap();
    assert_eq!(store.match_record(match_id).unwrap().status, MatchStatus::Live);

    store
        .record_event(
            match_id,
            MatchEvent::for_player(MatchEventKind::Goal, 12, home, scorer),
        )
        .unwrap();

    let m = store.match_record(match_id).unwrap();
    assert_eq!((m.home_score, m.away_score), (1, 0));
    assert_eq!(m.events.len(), 2);
    let goal = &m.events[1];
    assert_eq!(goal.player_name.as_deref(), Some("Home 3"));

    let player = store
        .team(home)
        .roster
        .iter()
        .find(|p| p.id == scorer)
        .unwrap()
        .stats
        .goals;
    assert_eq!(player, 1);
}

#[test]
fn end_event_finishes_the_match() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let home = team_with_roster(&mut store, owner, "Home");
    let away = team_with_roster(&mut store, owner, "Away");
    let match_id = scheduled_match(&mut store, owner, home, away);

    store
        .record_event(match_id, MatchEvent::new(MatchEventKind::End, 90))
        .unwrap();
    assert_eq!(
        store.match_record(match_id).unwrap().status,
        MatchStatus::Finished
    );
}

#[test]
fn finished_matches_are_immutable() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let home = team_with_roster(&mut store, owner, "Home");
    let away = team_with_roster(&mut store, owner, "Away");
    let match_id = scheduled_match(&mut store, owner, home, away);

    store
        .update_score(match_id, 2, 1, MatchStatus::Finished)
        .unwrap();

    assert_eq!(
        store.update_score(match_id, 9, 9, MatchStatus::Finished),
        Err(LeagueError::InvalidState)
    );
    assert_eq!(
        store.record_event(match_id, MatchEvent::new(MatchEventKind::Goal, 95)),
        Err(LeagueError::InvalidState)
    );
    let m = store.match_record(match_id).unwrap();
    assert_eq!((m.home_score, m.away_score), (2, 1));
}

#[test]
fn only_the_creator_may_delete() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let stranger = Uuid::new_v4();
    let team = team_with_roster(&mut store, owner, "Mine");

    assert_eq!(
        store.delete_team(team, stranger),
        Err(LeagueError::PermissionDenied)
    );
    store.delete_team(team, owner).unwrap();
}

#[test]
fn soft_deleted_records_leave_active_projections_but_stay_resolvable() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Ghosted");
    store.delete_team(team, owner).unwrap();

    assert!(store.active_teams().is_empty());
    // Name still resolves for history rendering.
    assert_eq!(store.team(team).name, "Ghosted");
}

#[test]
fn save_match_upserts_by_id() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let home = team_with_roster(&mut store, owner, "Home");
    let away = team_with_roster(&mut store, owner, "Away");
    let match_id = scheduled_match(&mut store, owner, home, away);

    let mut edited = store.match_record(match_id).unwrap().clone();
    edited.round = Some("Quarter final".to_string());
    store.save_match(edited);

    assert_eq!(store.matches.len(), 1);
    assert_eq!(
        store.match_record(match_id).unwrap().round.as_deref(),
        Some("Quarter final")
    );
}

#[test]
fn team_invite_accept_sets_affiliation_and_marks_read() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Recruiters");
    let invitee = store
        .register(UserAccount::new(
            "newplayer@example.com",
            "123",
            "New Player",
            Role::Player,
            None,
            "Testville",
        ))
        .unwrap();

    let notif = store
        .send_team_invite(owner, team, "newplayer@example.com")
        .unwrap();
    assert_eq!(store.unread_notifications(invitee).len(), 1);

    // The wrong account may not accept it.
    assert_eq!(
        store.accept_notification(notif, owner),
        Err(LeagueError::PermissionDenied)
    );

    store.accept_notification(notif, invitee).unwrap();
    assert_eq!(store.user(invitee).unwrap().team_id, Some(team));
    assert!(store.unread_notifications(invitee).is_empty());
    // Read, not deleted.
    assert_eq!(store.notifications.len(), 1);
}

#[test]
fn team_invites_need_director_or_team_creator() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Exclusive");
    let outsider = store
        .register(UserAccount::new(
            "outsider@example.com",
            "123",
            "Outsider",
            Role::Fan,
            None,
            "Elsewhere",
        ))
        .unwrap();

    assert_eq!(
        store.send_team_invite(outsider, team, "director@example.com"),
        Err(LeagueError::PermissionDenied)
    );
    // The team's creator may invite even without the director role: a coach
    // who created their own team keeps control of its roster.
    let coach = store
        .register(UserAccount::new(
            "coach@example.com",
            "123",
            "Coach",
            Role::Coach,
            None,
            "Testville",
        ))
        .unwrap();
    let own_team = team_with_roster(&mut store, coach, "Coached");
    assert!(store
        .send_team_invite(coach, own_team, "outsider@example.com")
        .is_ok());
}

#[test]
fn tournament_invite_accept_enrols_the_team_once() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Challengers");
    let cup = store.create_tournament(Tournament::new(
        "City Cup",
        TournamentFormat::League,
        Sport::Fut7,
        10,
        owner,
    ));

    let notif = store.send_tournament_invite(owner, cup, team).unwrap();
    store.accept_notification(notif, owner).unwrap();
    assert_eq!(
        store.tournament(cup).unwrap().participating_team_ids,
        vec![team]
    );

    // A second accept of a fresh invite does not enrol the team twice.
    let again = store.send_tournament_invite(owner, cup, team).unwrap();
    store.accept_notification(again, owner).unwrap();
    assert_eq!(store.tournament(cup).unwrap().participating_team_ids.len(), 1);
}

#[test]
fn formation_preset_lays_out_the_roster() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Tactical");

    store
        .apply_formation_preset(team, Formation::FourFourTwo)
        .unwrap();

    let formation = store.team(team).formation;
    assert_eq!(formation.len(), 11);
    // Keeper spot first.
    assert_eq!((formation[0].x, formation[0].y), (50.0, 90.0));
    assert_eq!(formation[0].player_id, store.team(team).roster[0].id);
}

#[test]
fn follow_toggle_round_trips_through_the_store() {
    let mut store = LeagueStore::empty();
    let owner = director(&mut store);
    let team = team_with_roster(&mut store, owner, "Popular");

    assert!(store.toggle_follow(owner, team, TargetType::Team));
    assert_eq!(store.social.len(), 1);
    assert!(!store.toggle_follow(owner, team, TargetType::Team));
    assert!(store.social.is_empty());
}

#[test]
fn only_directors_can_manage() {
    let mut store = LeagueStore::empty();
    let boss = director(&mut store);
    let fan = store
        .register(UserAccount::new(
            "fan@example.com",
            "123",
            "A Fan",
            Role::Fan,
            None,
            "Testville",
        ))
        .unwrap();
    assert!(store.can_manage(boss));
    assert!(!store.can_manage(fan));
    assert!(!store.can_manage(Uuid::new_v4()));
}

#[test]
fn reset_reseeds_from_scratch() {
    let mut store = LeagueStore::seeded();
    let owner = director(&mut store);
    team_with_roster(&mut store, owner, "Extra");
    assert_eq!(store.teams.len(), 21);

    store.reset();
    assert_eq!(store.teams.len(), 20);
    assert!(store.login("director@example.com", "secret").is_err());
}
