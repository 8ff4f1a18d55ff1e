//! Per-turn decision procedure
//!
//! Three steps, applied in a fixed order, each later step overwriting the
//! slot of any wizard it claims:
//!
//! 1. **Chase**: every wizard moves toward a nearby snaffle's extrapolated
//!    position, with a tie-break when both wizards want the same one.
//! 2. **Cast**: with enough magic in reserve, one free wizard pulls the
//!    highest-priority snaffle toward the opponent goal.
//! 3. **Score**: a wizard holding a snaffle always throws it at the
//!    opponent goal.
//!
//! The procedure is a pure function of the turn's snapshot; it keeps no
//! state between turns and never mutates the snapshot.

use tracing::debug;

use super::actions::Action;
use super::config::DecisionConfig;
use super::entity::Entity;
use super::game_constants::wizard;
use super::snapshot::WorldSnapshot;
use crate::error::{BotError, Result};

/// Compute one action per controlled wizard for this turn.
pub fn decide(
    world: &WorldSnapshot,
    config: &DecisionConfig,
) -> Result<[Action; wizard::PER_TEAM]> {
    let w0 = world.wizard(0)?;
    let w1 = world.wizard(1)?;

    let mut actions = chase_snaffles(world, config, w0, w1)?;

    if world.me.magic > config.magic_threshold {
        consider_cast(world, config, w0, w1, &mut actions);
    }

    // Possession wins over everything: a carrier always shoots.
    let opponent_goal = world.opponent.goal();
    if w0.is_grabbing() {
        actions[0] = Action::throw_at(opponent_goal, config.throw_power);
    }
    if w1.is_grabbing() {
        actions[1] = Action::throw_at(opponent_goal, config.throw_power);
    }

    Ok(actions)
}

/// Step 1: movement toward the nearest snaffles.
fn chase_snaffles(
    world: &WorldSnapshot,
    config: &DecisionConfig,
    w0: &Entity,
    w1: &Entity,
) -> Result<[Action; wizard::PER_TEAM]> {
    let w0_closest = world.closest_snaffles(w0.position);
    let w1_closest = world.closest_snaffles(w1.position);

    let (Some(w0_nearest), Some(w1_nearest)) = (w0_closest.first(), w1_closest.first()) else {
        return Err(BotError::NoSnafflesInPlay);
    };

    if w0_closest.len() == 1 {
        // Last snaffle in play: both wizards converge on it.
        return Ok([
            Action::move_to(w0_nearest.next_position(), config.move_thrust),
            Action::move_to(w1_nearest.next_position(), config.move_thrust),
        ]);
    }

    if w0_nearest.id == w1_nearest.id {
        // Both want the same snaffle. The wizard closer to it falls back to
        // its second choice; the farther one keeps chasing the contested one.
        let w0_dist = w0.position.distance_to(w0_nearest.position);
        let w1_dist = w1.position.distance_to(w1_nearest.position);
        let closer = if w0_dist > w1_dist { 1 } else { 0 };
        debug!(
            contested = w0_nearest.id,
            closer_slot = closer,
            "contended snaffle, splitting targets"
        );
        let w0_pick = if closer == 1 { w0_closest[0] } else { w0_closest[1] };
        let w1_pick = if closer == 1 { w1_closest[1] } else { w1_closest[0] };
        return Ok([
            Action::move_to(w0_pick.next_position(), config.move_thrust),
            Action::move_to(w1_pick.next_position(), config.move_thrust),
        ]);
    }

    Ok([
        Action::move_to(w0_nearest.next_position(), config.move_thrust),
        Action::move_to(w1_nearest.next_position(), config.move_thrust),
    ])
}

/// Step 2: magic-gated snaffle pull.
///
/// The priority snaffle sits nearest to our own goal while we lead (clear the
/// danger) and nearest to the opponent goal otherwise (push for a score).
/// The spell itself always drags it toward the opponent goal.
fn consider_cast(
    world: &WorldSnapshot,
    config: &DecisionConfig,
    w0: &Entity,
    w1: &Entity,
    actions: &mut [Action; wizard::PER_TEAM],
) {
    debug!(magic = world.me.magic, "magic reserve above threshold");

    let rally_point = if world.me.score > world.opponent.score {
        world.me.goal()
    } else {
        world.opponent.goal()
    };
    let Some(target) = world.closest_snaffles(rally_point).into_iter().next() else {
        return;
    };

    let caster = match (w0.is_grabbing(), w1.is_grabbing()) {
        (false, false) => {
            let aim = target.next_position();
            let slot =
                if w0.position.distance_to(aim) > w1.position.distance_to(aim) { 1 } else { 0 };
            debug!(slot, "both wizards free, nearer one casts");
            Some(slot)
        }
        (false, true) => {
            debug!("wizard slot 0 free to cast");
            Some(0)
        }
        (true, false) => {
            debug!("wizard slot 1 free to cast");
            Some(1)
        }
        (true, true) => {
            debug!("both wizards carrying, no cast");
            None
        }
    };

    if let Some(slot) = caster {
        debug!(snaffle = target.id, magic = config.spell_magic, "casting snaffle pull");
        actions[slot] = Action::spell_on(target.id, world.opponent.goal(), config.spell_magic);
    }
}
