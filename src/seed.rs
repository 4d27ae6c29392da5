//! Mock league data: the seed the store starts from (nothing persists).

use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::{
    Arena, MatchKind, MatchRecord, MatchStatus, Player, Position, Role, Sport, Team, Tournament,
    TournamentFormat, UserAccount,
};
use crate::store::LeagueStore;

const CITIES: [&str; 10] = [
    "Sao Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Porto Alegre",
    "Curitiba",
    "Salvador",
    "Recife",
    "Fortaleza",
    "Brasilia",
    "Manaus",
];

const ARENA_COUNT: usize = 10;
const TEAM_COUNT: usize = 20;
const ROSTER_SIZE: usize = 15;
const USER_COUNT: usize = 100;
const TOURNAMENT_COUNT: usize = 5;
const MATCH_COUNT: usize = 40;

/// Build a fully seeded store: arenas, teams with rosters, accounts across
/// all five roles, tournaments with participants, and a spread of finished,
/// live, pending and upcoming matches. Social graph and inbox start empty.
pub fn seed_store() -> LeagueStore {
    let mut rng = rand::thread_rng();
    let mut store = LeagueStore::empty();

    for i in 0..ARENA_COUNT {
        store.arenas.push(Arena::new(
            format!("Arena {}", i + 1),
            format!("Sports Street, {}", 100 + i),
            -23.55 + rng.gen::<f64>() * 0.1,
            -46.63 + rng.gen::<f64>() * 0.1,
        ));
    }

    // First seeded account is the league's founding director; every seed
    // record is owned by them.
    let mut users: Vec<UserAccount> = (0..USER_COUNT)
        .map(|i| {
            let role = match i {
                0..=4 => Role::Director,
                5..=24 => Role::Coach,
                25..=59 => Role::Player,
                60..=64 => Role::Referee,
                _ => Role::Fan,
            };
            UserAccount::new(
                format!("user{}@example.com", i + 1),
                "123",
                format!("User {}", i + 1),
                role,
                None,
                CITIES[i % CITIES.len()],
            )
        })
        .collect();
    let director_id = users[0].id;

    for i in 0..TEAM_COUNT {
        let mut team = Team::new(
            format!("Team {} FC", i + 1),
            format!("T{}", i + 1),
            CITIES[i % CITIES.len()],
            director_id,
        );
        team.roster = (0..ROSTER_SIZE)
            .map(|j| {
                let position = match j {
                    0 => Position::Goalkeeper,
                    1..=4 => Position::Defender,
                    5..=9 => Position::Midfielder,
                    _ => Position::Forward,
                };
                let mut p = Player::new(format!("Player {}-{}", i + 1, j + 1), j as u32 + 1, position);
                p.stats.goals = rng.gen_range(0..5);
                p.stats.assists = rng.gen_range(0..3);
                p
            })
            .collect();
        store.teams.push(team);
    }

    // Coaches and players get a team affiliation, two per team.
    for (i, user) in users.iter_mut().enumerate() {
        if matches!(user.role, Role::Coach | Role::Player) && i >= 5 {
            user.team_id = Some(store.teams[(i - 5) / 2 % TEAM_COUNT].id);
        }
    }
    store.users = users;

    for i in 0..TOURNAMENT_COUNT {
        let mut t = Tournament::new(
            format!("Cup {}", i + 1),
            if i % 2 == 0 {
                TournamentFormat::League
            } else {
                TournamentFormat::Knockout
            },
            Sport::Fut7,
            10,
            director_id,
        );
        t.current_round = 3;
        t.participating_team_ids = store.teams[i * 4..i * 4 + 4].iter().map(|t| t.id).collect();
        store.tournaments.push(t);
    }

    let now = Utc::now();
    for i in 0..MATCH_COUNT {
        let home = store.teams[i % TEAM_COUNT].id;
        let away = store.teams[(i + 1) % TEAM_COUNT].id;
        let kind = if i % 5 == 0 {
            MatchKind::Friendly
        } else {
            MatchKind::League
        };
        let mut m = MatchRecord::new(
            home,
            away,
            now + Duration::days(i as i64 - 20),
            store.arenas[i % ARENA_COUNT].id,
            kind,
            Sport::Fut7,
            director_id,
        );
        m.status = match i {
            0..=19 => MatchStatus::Finished,
            20 => MatchStatus::Live,
            25 | 32 => MatchStatus::WaitingAcceptance,
            _ => MatchStatus::Scheduled,
        };
        if m.status == MatchStatus::Finished {
            m.home_score = rng.gen_range(0..5);
            m.away_score = rng.gen_range(0..5);
        }
        if kind != MatchKind::Friendly {
            m.tournament_id = Some(store.tournaments[i % TOURNAMENT_COUNT].id);
            m.round = Some("Round 3".to_string());
        }
        store.matches.push(m);
    }

    store
}
