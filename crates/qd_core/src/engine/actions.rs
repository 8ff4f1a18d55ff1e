//! Per-wizard orders and their protocol rendering
//!
//! The decision procedure produces exactly one `Action` per controlled wizard
//! per turn; `Display` renders the referee line for it. Every numeric field
//! is rounded to the nearest integer at render time, since the referee
//! rejects fractional coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::Point;

/// One order for one wizard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Steer toward `target` with the given thrust.
    Move { target: Point, thrust: f64 },
    /// Hurl the held snaffle toward `target` with the given power.
    Throw { target: Point, power: f64 },
    /// Pull snaffle `target_id` toward `target` (the WINGARDIUM spell).
    Spell { target_id: i32, target: Point, magic: f64 },
}

impl Action {
    pub fn move_to(target: Point, thrust: f64) -> Self {
        Action::Move { target, thrust }
    }

    pub fn throw_at(target: Point, power: f64) -> Self {
        Action::Throw { target, power }
    }

    pub fn spell_on(target_id: i32, target: Point, magic: f64) -> Self {
        Action::Spell { target_id, target, magic }
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { target, thrust } => {
                write!(f, "MOVE {} {} {}", round(target.x), round(target.y), round(*thrust))
            }
            Action::Throw { target, power } => {
                write!(f, "THROW {} {} {}", round(target.x), round(target.y), round(*power))
            }
            Action::Spell { target_id, target, magic } => {
                write!(
                    f,
                    "WINGARDIUM {} {} {} {}",
                    target_id,
                    round(target.x),
                    round(target.y),
                    round(*magic)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_renders_rounded_fields() {
        let action = Action::move_to(Point::new(7880.4, 3809.5), 150.0);
        assert_eq!(action.to_string(), "MOVE 7880 3810 150");
    }

    #[test]
    fn test_throw_renders_goal_line() {
        let action = Action::throw_at(Point::new(16000.0, 3750.0), 500.0);
        assert_eq!(action.to_string(), "THROW 16000 3750 500");
    }

    #[test]
    fn test_spell_renders_target_id_first() {
        let action = Action::spell_on(5, Point::new(0.0, 3750.0), 33.0);
        assert_eq!(action.to_string(), "WINGARDIUM 5 0 3750 33");
    }
}
