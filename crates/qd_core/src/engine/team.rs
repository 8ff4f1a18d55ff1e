//! Team sides and per-turn team totals
//!
//! Field-side facts (defended goal, controlled wizard id range) are derived
//! once from the team id the referee hands out before the first turn.
//! Score and magic are referee-authoritative totals, overwritten wholesale
//! every turn and never accumulated locally.

use serde::{Deserialize, Serialize};

use super::game_constants::{field, goal, wizard};
use super::geometry::Point;
use crate::error::{BotError, Result};

/// Which half of the field a team defends.
///
/// The referee's team id 0 defends the left goal and owns wizard ids {0, 1};
/// team id 1 defends the right goal and owns wizard ids {2, 3}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TeamSide {
    #[default]
    Left,
    Right,
}

impl TeamSide {
    pub fn from_id(id: i64) -> Result<Self> {
        match id {
            0 => Ok(TeamSide::Left),
            1 => Ok(TeamSide::Right),
            other => Err(BotError::InvalidTeamId(other)),
        }
    }

    /// Referee team id (0 = Left, 1 = Right).
    #[inline]
    pub const fn team_id(self) -> u32 {
        match self {
            TeamSide::Left => 0,
            TeamSide::Right => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Left => TeamSide::Right,
            TeamSide::Right => TeamSide::Left,
        }
    }

    /// Center of the goal this side defends.
    #[inline]
    pub const fn goal_center(self) -> Point {
        match self {
            TeamSide::Left => Point::new(goal::LEFT_X, field::CENTER_Y),
            TeamSide::Right => Point::new(goal::RIGHT_X, field::CENTER_Y),
        }
    }

    /// Lowest wizard id this side controls; slots are `base..base + PER_TEAM`.
    #[inline]
    pub const fn wizard_id_base(self) -> i32 {
        match self {
            TeamSide::Left => 0,
            TeamSide::Right => wizard::PER_TEAM as i32,
        }
    }
}

/// One team's side plus the current turn's referee totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub side: TeamSide,
    pub score: u32,
    pub magic: u32,
}

impl Team {
    pub fn new(side: TeamSide) -> Self {
        Self { side, score: 0, magic: 0 }
    }

    /// Team with this turn's totals already applied.
    pub fn with_totals(side: TeamSide, score: u32, magic: u32) -> Self {
        Self { side, score, magic }
    }

    /// Center of the goal this team defends.
    pub fn goal(&self) -> Point {
        self.side.goal_center()
    }

    /// Id of the controlled wizard in the given local slot (0 or 1).
    pub fn wizard_id(&self, slot: usize) -> i32 {
        self.side.wizard_id_base() + slot as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_id() {
        assert_eq!(TeamSide::from_id(0).unwrap(), TeamSide::Left);
        assert_eq!(TeamSide::from_id(1).unwrap(), TeamSide::Right);
        assert!(matches!(TeamSide::from_id(2), Err(BotError::InvalidTeamId(2))));
    }

    #[test]
    fn test_goal_centers() {
        assert_eq!(TeamSide::Left.goal_center(), Point::new(0.0, 3750.0));
        assert_eq!(TeamSide::Right.goal_center(), Point::new(16000.0, 3750.0));
    }

    #[test]
    fn test_wizard_id_ranges() {
        let left = Team::new(TeamSide::Left);
        assert_eq!(left.wizard_id(0), 0);
        assert_eq!(left.wizard_id(1), 1);

        let right = Team::new(TeamSide::Right);
        assert_eq!(right.wizard_id(0), 2);
        assert_eq!(right.wizard_id(1), 3);
    }

    #[test]
    fn test_opponent_side_round_trips() {
        assert_eq!(TeamSide::Left.opponent(), TeamSide::Right);
        assert_eq!(TeamSide::Right.opponent().opponent(), TeamSide::Right);
    }
}
