//! Match feed selector: filter matches and split them into "mine" vs "other".

use serde::Serialize;

use crate::models::{
    MatchKind, MatchRecord, MatchStatus, Role, SocialConnection, TargetType, TeamId, Tournament,
    TournamentId, Viewer,
};

/// Referees have no real assignment model; the first few upcoming matches of
/// the filtered list stand in for their assigned games.
pub const REFEREE_ASSIGNMENT_COUNT: usize = 3;

/// Status facet of the feed filter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MatchStatus),
}

impl StatusFilter {
    /// Parse a query-string value. Unrecognised values degrade to `All`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "scheduled" => StatusFilter::Only(MatchStatus::Scheduled),
            "waiting_acceptance" => StatusFilter::Only(MatchStatus::WaitingAcceptance),
            "live" => StatusFilter::Only(MatchStatus::Live),
            "finished" => StatusFilter::Only(MatchStatus::Finished),
            _ => StatusFilter::All,
        }
    }

    fn keeps(self, m: &MatchRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => m.status == status,
        }
    }
}

/// Context facet of the feed filter: everything, friendlies only, or one
/// tournament's matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum ContextFilter {
    #[default]
    All,
    Friendly,
    Tournament(TournamentId),
}

impl ContextFilter {
    /// Parse a query-string value against the known tournaments (matched by
    /// name, as the filter bar shows names). Unknown values degrade to `All`.
    pub fn from_param(value: &str, tournaments: &[&Tournament]) -> Self {
        match value {
            "" | "all" => ContextFilter::All,
            "friendly" => ContextFilter::Friendly,
            name => tournaments
                .iter()
                .find(|t| t.name == name)
                .map(|t| ContextFilter::Tournament(t.id))
                .unwrap_or(ContextFilter::All),
        }
    }

    /// A tournament id naming no known tournament is treated as `All`, the
    /// permissive default.
    fn resolve(self, tournaments: &[&Tournament]) -> Self {
        match self {
            ContextFilter::Tournament(id) if !tournaments.iter().any(|t| t.id == id) => {
                ContextFilter::All
            }
            other => other,
        }
    }

    fn keeps(self, m: &MatchRecord) -> bool {
        match self {
            ContextFilter::All => true,
            ContextFilter::Friendly => m.kind == MatchKind::Friendly,
            ContextFilter::Tournament(id) => m.tournament_id == Some(id),
        }
    }
}

/// The two output sections of the feed: personally relevant matches and the
/// rest (rendered collapsed behind a toggle).
#[derive(Clone, Debug, Default, Serialize)]
pub struct MatchFeed {
    pub mine: Vec<MatchRecord>,
    pub other: Vec<MatchRecord>,
}

/// Build the feed for `viewer`. Filters compose in a fixed order: status,
/// then context, then the mine/other partition; both sections end up sorted
/// by date ascending.
///
/// Partition rules per role:
/// - Referee: first [`REFEREE_ASSIGNMENT_COUNT`] matches of the filtered
///   date-ascending list are "mine", the rest "other".
/// - A viewer with a team: matches involving that team are "mine". Fans
///   additionally pull in matches involving teams they follow (with or
///   without a team of their own).
/// - No affiliation, nothing followed: "mine" is empty.
/// - A director filtering exactly on waiting-acceptance sees every filtered
///   match as "mine" (pending challenges are their inbox, not just their
///   team's).
pub fn match_feed(
    matches: &[&MatchRecord],
    viewer: Viewer,
    social: &[SocialConnection],
    tournaments: &[&Tournament],
    status: StatusFilter,
    context: ContextFilter,
) -> MatchFeed {
    let context = context.resolve(tournaments);
    let mut filtered: Vec<&MatchRecord> = matches
        .iter()
        .copied()
        .filter(|m| status.keeps(m) && context.keeps(m))
        .collect();
    filtered.sort_by_key(|m| m.date);

    let mut mine: Vec<&MatchRecord>;
    let mut other: Vec<&MatchRecord>;

    if viewer.role == Role::Director && status == StatusFilter::Only(MatchStatus::WaitingAcceptance)
    {
        mine = filtered;
        other = Vec::new();
    } else if viewer.role == Role::Referee {
        let split = REFEREE_ASSIGNMENT_COUNT.min(filtered.len());
        other = filtered.split_off(split);
        mine = filtered;
    } else {
        let followed: Vec<TeamId> = if viewer.role == Role::Fan {
            followed_team_ids(social, viewer)
        } else {
            Vec::new()
        };
        let is_mine = |m: &MatchRecord| {
            viewer.team_id.map_or(false, |tid| m.involves(tid))
                || followed.iter().any(|&tid| m.involves(tid))
        };
        mine = Vec::new();
        other = Vec::new();
        for m in filtered {
            if is_mine(m) {
                mine.push(m);
            } else {
                other.push(m);
            }
        }
    }

    MatchFeed {
        mine: mine.into_iter().cloned().collect(),
        other: other.into_iter().cloned().collect(),
    }
}

/// Teams the viewer follows (TEAM edges where the viewer is the follower).
fn followed_team_ids(social: &[SocialConnection], viewer: Viewer) -> Vec<TeamId> {
    social
        .iter()
        .filter(|s| s.follower_id == viewer.id && s.target_type == TargetType::Team)
        .map(|s| s.target_id)
        .collect()
}
