//! Standings calculator: ranked win/draw/loss/points table over finished matches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{MatchRecord, MatchStatus, Team, TeamId, TournamentId};

/// Which matches the calculator considers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StandingsScope {
    /// Every finished match between teams in the input set.
    All,
    /// Only finished matches tagged with this tournament.
    Tournament(TournamentId),
}

/// One row of the standings table. `points` and `goal_difference` are filled
/// in from the counters when the table is built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    fn zero(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn record_goals(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
    }
}

/// Compute the ranked standings for `teams` over the finished matches in
/// scope. Callers pass soft-delete-filtered teams and matches.
///
/// Every input team gets a row, all-zero when it has no scoped matches.
/// A match counts only when BOTH sides are in the input set; otherwise it is
/// ignored entirely rather than half-counted. Win = 3 points, draw = 1 each.
/// Order: points desc, goal difference desc, goals for desc, name asc — a
/// total order, independent of insertion order.
pub fn standings(
    teams: &[&Team],
    matches: &[&MatchRecord],
    scope: StandingsScope,
) -> Vec<StandingsRow> {
    let mut rows: HashMap<TeamId, StandingsRow> = teams
        .iter()
        .map(|t| (t.id, StandingsRow::zero(t)))
        .collect();

    for m in matches {
        if m.status != MatchStatus::Finished {
            continue;
        }
        if let StandingsScope::Tournament(id) = scope {
            if m.tournament_id != Some(id) {
                continue;
            }
        }
        if !rows.contains_key(&m.home_team_id) || !rows.contains_key(&m.away_team_id) {
            continue;
        }
        // A team can't play itself; such a record would count double.
        if m.home_team_id == m.away_team_id {
            continue;
        }

        if let Some(home) = rows.get_mut(&m.home_team_id) {
            home.record_goals(m.home_score, m.away_score);
        }
        if let Some(away) = rows.get_mut(&m.away_team_id) {
            away.record_goals(m.away_score, m.home_score);
        }

        let (winner, loser) = if m.home_score > m.away_score {
            (Some(m.home_team_id), Some(m.away_team_id))
        } else if m.home_score < m.away_score {
            (Some(m.away_team_id), Some(m.home_team_id))
        } else {
            (None, None)
        };
        match (winner, loser) {
            (Some(w), Some(l)) => {
                if let Some(r) = rows.get_mut(&w) {
                    r.wins += 1;
                }
                if let Some(r) = rows.get_mut(&l) {
                    r.losses += 1;
                }
            }
            _ => {
                for id in [m.home_team_id, m.away_team_id] {
                    if let Some(r) = rows.get_mut(&id) {
                        r.draws += 1;
                    }
                }
            }
        }
    }

    let mut table: Vec<StandingsRow> = rows
        .into_values()
        .map(|mut r| {
            r.points = r.wins * 3 + r.draws;
            r.goal_difference = i64::from(r.goals_for) - i64::from(r.goals_against);
            r
        })
        .collect();

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team_name.cmp(&b.team_name))
    });
    table
}
