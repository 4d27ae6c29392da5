//! Formation presets for the tactics board.

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, TacticalPosition};

/// Standard formation presets (goalkeeper plus ten outfield spots).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
}

impl Formation {
    /// Outfield spots as (x, y) percentages, defence first. The goalkeeper
    /// spot at (50, 90) is common to all presets.
    fn outfield_spots(self) -> &'static [(f32, f32)] {
        match self {
            Formation::FourFourTwo => &[
                (15.0, 70.0),
                (40.0, 70.0),
                (60.0, 70.0),
                (85.0, 70.0),
                (15.0, 45.0),
                (40.0, 45.0),
                (60.0, 45.0),
                (85.0, 45.0),
                (35.0, 20.0),
                (65.0, 20.0),
            ],
            Formation::FourThreeThree => &[
                (15.0, 70.0),
                (40.0, 70.0),
                (60.0, 70.0),
                (85.0, 70.0),
                (50.0, 50.0),
                (30.0, 40.0),
                (70.0, 40.0),
                (15.0, 20.0),
                (50.0, 20.0),
                (85.0, 20.0),
            ],
            Formation::ThreeFiveTwo => &[
                (30.0, 75.0),
                (50.0, 75.0),
                (70.0, 75.0),
                (15.0, 50.0),
                (35.0, 50.0),
                (50.0, 45.0),
                (65.0, 50.0),
                (85.0, 50.0),
                (40.0, 20.0),
                (60.0, 20.0),
            ],
        }
    }
}

/// Lay the roster out in the given formation: first player in goal, then the
/// preset spots in roster order. Short rosters fill as many spots as they
/// can; an empty roster yields an empty layout.
pub fn formation_positions(formation: Formation, roster: &[PlayerId]) -> Vec<TacticalPosition> {
    let mut positions = Vec::with_capacity(roster.len().min(11));
    let mut ids = roster.iter().copied();

    if let Some(keeper) = ids.next() {
        positions.push(TacticalPosition {
            player_id: keeper,
            x: 50.0,
            y: 90.0,
        });
    }
    for (&(x, y), player_id) in formation.outfield_spots().iter().zip(ids) {
        positions.push(TacticalPosition { player_id, x, y });
    }
    positions
}
