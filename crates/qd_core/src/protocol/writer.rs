//! Action emission
//!
//! One line per controlled wizard, in slot order, flushed once per turn so
//! the referee never waits on a buffered frame. Only protocol lines go to
//! this sink; diagnostics stay on the tracing subscriber's stream.

use std::io::Write;

use crate::engine::actions::Action;
use crate::error::Result;

pub fn write_actions<W: Write>(output: &mut W, actions: &[Action]) -> Result<()> {
    for action in actions {
        writeln!(output, "{action}")?;
    }
    output.flush()?;
    Ok(())
}
