//! Per-turn world snapshot
//!
//! One `WorldSnapshot` aggregates both teams' totals and the full entity
//! list for a single turn. It is rebuilt from input every turn and owns its
//! contents outright; the previous turn's snapshot is discarded, so no logic
//! can lean on stale entity references.
//!
//! Distance-sorted queries keep ties deterministic: `f64::total_cmp` as the
//! comparator plus a stable sort, so equal distances preserve referee input
//! order on every platform.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::geometry::Point;
use super::team::Team;
use crate::error::{BotError, Result};

/// Everything observable this turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub me: Team,
    pub opponent: Team,
    /// All reported entities, in referee input order.
    pub entities: Vec<Entity>,
}

impl WorldSnapshot {
    pub fn new(me: Team, opponent: Team, entities: Vec<Entity>) -> Self {
        Self { me, opponent, entities }
    }

    /// All entities sorted ascending by distance from `from`.
    ///
    /// Ties keep input order (stable sort).
    pub fn closest_entities(&self, from: Point) -> Vec<&Entity> {
        let mut sorted: Vec<&Entity> = self.entities.iter().collect();
        sorted.sort_by(|a, b| {
            a.position.distance_to(from).total_cmp(&b.position.distance_to(from))
        });
        sorted
    }

    /// Snaffles sorted ascending by distance from `from`.
    pub fn closest_snaffles(&self, from: Point) -> Vec<&Entity> {
        self.closest_entities(from)
            .into_iter()
            .filter(|entity| entity.is_snaffle())
            .collect()
    }

    /// The controlled wizard in local slot 0 or 1.
    pub fn wizard(&self, slot: usize) -> Result<&Entity> {
        let id = self.me.wizard_id(slot);
        self.entities
            .iter()
            .find(|entity| entity.id == id)
            .ok_or(BotError::MissingWizard { id })
    }

    /// JSON rendering for trace-level diagnostics.
    pub fn dump_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
