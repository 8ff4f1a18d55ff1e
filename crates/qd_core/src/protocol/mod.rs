//! Referee protocol surface
//!
//! The engine stays I/O-free; this module owns the session with the referee:
//! read the team id once, then per turn read a frame, run the decision
//! procedure, and emit one action line per wizard. The loop ends when the
//! referee closes the input stream at a frame boundary.

pub mod reader;
pub mod writer;

pub use reader::TurnReader;
pub use writer::write_actions;

use std::io::{BufRead, Write};

use tracing::{debug, info, trace};

use crate::engine::config::DecisionConfig;
use crate::engine::decision::decide;
use crate::error::Result;

/// Drive a full session: read team id, then loop read → decide → emit.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &DecisionConfig) -> Result<()> {
    let mut reader = TurnReader::new(input);
    let my_side = reader.read_team_id()?;
    info!(team_id = my_side.team_id(), "session started");

    let mut turn: u64 = 0;
    while let Some(world) = reader.read_turn(my_side)? {
        turn += 1;
        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(turn, snapshot = %world.dump_json()?, "turn snapshot");
        }
        let actions = decide(&world, config)?;
        debug!(
            turn,
            entities = world.entities.len(),
            score = world.me.score,
            magic = world.me.magic,
            "actions committed"
        );
        write_actions(&mut output, &actions)?;
    }

    info!(turns = turn, "input closed, session over");
    Ok(())
}
