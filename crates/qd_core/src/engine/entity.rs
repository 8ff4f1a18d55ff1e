//! Entities on the field
//!
//! Every unit the referee reports (own wizards, opponent wizards, snaffles,
//! bludgers) is one `Entity` carrying identity, kinematic state, and a
//! role-specific payload. The referee's per-role `state` integer means
//! different things per role, so `Role` is a tagged union rather than a
//! class-style hierarchy: `grabbing`/`grabbed` for possession, the chased
//! wizard id for bludgers.
//!
//! Entities are rebuilt wholesale from input every turn; only `id` is stable
//! across turns.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::{Point, Vector};

/// Role discriminant plus the role-specific slice of the `state` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A wizard under our control. `grabbing` is set while it holds a snaffle.
    Wizard { grabbing: bool },
    /// An opposing wizard. Same possession semantics as `Wizard`.
    OpponentWizard { grabbing: bool },
    /// The neutral ball both teams compete for. `grabbed` is set while some
    /// wizard holds it.
    Snaffle { grabbed: bool },
    /// A neutral chaser. `chase_target` is the id of the wizard it last aimed
    /// for; the heuristic tracks bludgers but never acts on them.
    Bludger { chase_target: i32 },
}

impl Role {
    /// Build a role from the referee's tag string and `state` field.
    ///
    /// Returns `None` for tags this bot does not know; the caller drops the
    /// record without failing the turn.
    pub fn from_tag(tag: &str, state: i32) -> Option<Role> {
        match tag {
            "WIZARD" => Some(Role::Wizard { grabbing: state != 0 }),
            "OPPONENT_WIZARD" => Some(Role::OpponentWizard { grabbing: state != 0 }),
            "SNAFFLE" => Some(Role::Snaffle { grabbed: state != 0 }),
            "BLUDGER" => Some(Role::Bludger { chase_target: state }),
            _ => None,
        }
    }

    /// Protocol tag for this role.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Wizard { .. } => "WIZARD",
            Role::OpponentWizard { .. } => "OPPONENT_WIZARD",
            Role::Snaffle { .. } => "SNAFFLE",
            Role::Bludger { .. } => "BLUDGER",
        }
    }
}

/// One unit on the field for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i32,
    pub role: Role,
    pub position: Point,
    pub velocity: Vector,
}

impl Entity {
    pub fn new(id: i32, role: Role, position: Point, velocity: Vector) -> Self {
        Self { id, role, position, velocity }
    }

    /// One-turn linear extrapolation, used to aim ahead of moving targets.
    pub fn next_position(&self) -> Point {
        self.position.translate(self.velocity)
    }

    pub fn is_snaffle(&self) -> bool {
        matches!(self.role, Role::Snaffle { .. })
    }

    /// Whether a wizard-role entity currently holds a snaffle. False for
    /// non-wizard roles.
    pub fn is_grabbing(&self) -> bool {
        matches!(
            self.role,
            Role::Wizard { grabbing: true } | Role::OpponentWizard { grabbing: true }
        )
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entity id:{} type:{} position:{} velocity:{}",
            self.id,
            self.role.tag(),
            self.position,
            self.velocity
        )
    }
}
