//! Team form: the W/D/L tags for a team's most recent finished matches.

use serde::{Deserialize, Serialize};

use crate::models::{MatchRecord, MatchStatus, TeamId};

/// How many recent results make up a team's form strip.
pub const FORM_LENGTH: usize = 3;

/// Outcome of one finished match from a given team's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormOutcome {
    Win,
    Draw,
    Loss,
}

impl FormOutcome {
    pub fn letter(self) -> char {
        match self {
            FormOutcome::Win => 'W',
            FormOutcome::Draw => 'D',
            FormOutcome::Loss => 'L',
        }
    }
}

/// The team's last results, most recent first, at most [`FORM_LENGTH`] of
/// them. Only finished matches involving the team count; the team's own
/// score is compared against the opponent's per match.
pub fn team_form(team_id: TeamId, matches: &[&MatchRecord]) -> Vec<FormOutcome> {
    let mut played: Vec<&MatchRecord> = matches
        .iter()
        .copied()
        .filter(|m| m.status == MatchStatus::Finished && m.involves(team_id))
        .collect();
    played.sort_by(|a, b| b.date.cmp(&a.date));

    played
        .into_iter()
        .take(FORM_LENGTH)
        .map(|m| {
            let (own, opponent) = if m.home_team_id == team_id {
                (m.home_score, m.away_score)
            } else {
                (m.away_score, m.home_score)
            };
            if own > opponent {
                FormOutcome::Win
            } else if own < opponent {
                FormOutcome::Loss
            } else {
                FormOutcome::Draw
            }
        })
        .collect()
}
