//! Referee input parsing
//!
//! The referee speaks a line-oriented protocol: one team-id line before the
//! first turn, then one frame per turn (own totals, opponent totals, entity
//! count, entity records). `TurnReader` wraps any `BufRead` so tests can
//! drive it from in-memory buffers.
//!
//! Entity records with an unknown tag are dropped without failing the turn;
//! everything else that deviates from the frame shape is a fatal error
//! carrying the offending line.

use std::io::BufRead;

use tracing::debug;

use crate::engine::entity::{Entity, Role};
use crate::engine::geometry::{Point, Vector};
use crate::engine::snapshot::WorldSnapshot;
use crate::engine::team::{Team, TeamSide};
use crate::error::{BotError, Result};

pub struct TurnReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> TurnReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, line: String::new() }
    }

    /// Pull the next input line into the buffer; false on end of input.
    fn advance(&mut self) -> Result<bool> {
        self.line.clear();
        Ok(self.input.read_line(&mut self.line)? != 0)
    }

    /// Next input line, `None` on end of input.
    fn next_line(&mut self) -> Result<Option<&str>> {
        if self.advance()? {
            Ok(Some(self.line.trim()))
        } else {
            Ok(None)
        }
    }

    /// Next input line, erroring if the stream ends mid-frame.
    fn expect_line(&mut self) -> Result<&str> {
        if !self.advance()? {
            return Err(BotError::UnexpectedEof);
        }
        Ok(self.line.trim())
    }

    /// The one-time team-id line sent before the first turn.
    pub fn read_team_id(&mut self) -> Result<TeamSide> {
        let line = self.expect_line()?;
        let id = parse_single_int(line)?;
        TeamSide::from_id(id)
    }

    /// One turn frame, or `None` when the referee closed the stream at a
    /// frame boundary.
    pub fn read_turn(&mut self, my_side: TeamSide) -> Result<Option<WorldSnapshot>> {
        let Some(first) = self.next_line()? else {
            return Ok(None);
        };
        let (my_score, my_magic) = parse_totals(first)?;
        let (opp_score, opp_magic) = parse_totals(self.expect_line()?)?;

        let count_line = self.expect_line()?;
        let count = parse_single_int(count_line)?;
        let count = usize::try_from(count)
            .map_err(|_| BotError::malformed(count_line, "negative entity count"))?;

        let mut entities = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(entity) = parse_entity(self.expect_line()?)? {
                entities.push(entity);
            }
        }

        let me = Team::with_totals(my_side, my_score, my_magic);
        let opponent = Team::with_totals(my_side.opponent(), opp_score, opp_magic);
        Ok(Some(WorldSnapshot::new(me, opponent, entities)))
    }
}

fn parse_int(token: &str, line: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| BotError::malformed(line, format!("expected integer, got {token:?}")))
}

fn parse_single_int(line: &str) -> Result<i64> {
    let mut tokens = line.split_whitespace();
    let value = tokens
        .next()
        .ok_or_else(|| BotError::malformed(line, "expected one integer, got empty line"))?;
    if tokens.next().is_some() {
        return Err(BotError::malformed(line, "expected exactly one field"));
    }
    parse_int(value, line)
}

/// A `score magic` totals line.
fn parse_totals(line: &str) -> Result<(u32, u32)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(BotError::malformed(line, "expected `score magic`"));
    }
    let score = parse_int(tokens[0], line)?;
    let magic = parse_int(tokens[1], line)?;
    let score = u32::try_from(score).map_err(|_| BotError::malformed(line, "negative score"))?;
    let magic = u32::try_from(magic).map_err(|_| BotError::malformed(line, "negative magic"))?;
    Ok((score, magic))
}

/// An `id type x y vx vy state` entity record. `Ok(None)` for unknown tags.
fn parse_entity(line: &str) -> Result<Option<Entity>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 7 {
        return Err(BotError::malformed(line, "expected `id type x y vx vy state`"));
    }
    let id = parse_int(tokens[0], line)?;
    let id = i32::try_from(id).map_err(|_| BotError::malformed(line, "entity id out of range"))?;
    let tag = tokens[1];
    let x = parse_int(tokens[2], line)? as f64;
    let y = parse_int(tokens[3], line)? as f64;
    let vx = parse_int(tokens[4], line)? as f64;
    let vy = parse_int(tokens[5], line)? as f64;
    let state = parse_int(tokens[6], line)?;
    let state =
        i32::try_from(state).map_err(|_| BotError::malformed(line, "state out of range"))?;

    match Role::from_tag(tag, state) {
        Some(role) => Ok(Some(Entity::new(id, role, Point::new(x, y), Vector::new(vx, vy)))),
        None => {
            debug!(tag, "skipping entity with unknown tag");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TurnReader<Cursor<&str>> {
        TurnReader::new(Cursor::new(input))
    }

    #[test]
    fn test_read_team_id() {
        assert_eq!(reader("1\n").read_team_id().unwrap(), TeamSide::Right);
        assert_eq!(reader("0\n").read_team_id().unwrap(), TeamSide::Left);
        assert!(matches!(reader("2\n").read_team_id(), Err(BotError::InvalidTeamId(2))));
        assert!(matches!(reader("").read_team_id(), Err(BotError::UnexpectedEof)));
    }

    #[test]
    fn test_read_turn_builds_snapshot_in_input_order() {
        let input = "3 21\n2 40\n3\n4 SNAFFLE 8000 3750 -100 50 0\n\
                     0 WIZARD 1000 3750 0 0 1\n3 BLUDGER 5000 1000 200 0 2\n";
        let world = reader(input).read_turn(TeamSide::Left).unwrap().unwrap();

        assert_eq!(world.me.score, 3);
        assert_eq!(world.me.magic, 21);
        assert_eq!(world.opponent.score, 2);
        assert_eq!(world.opponent.magic, 40);
        assert_eq!(world.opponent.side, TeamSide::Right);

        let ids: Vec<i32> = world.entities.iter().map(|entity| entity.id).collect();
        assert_eq!(ids, vec![4, 0, 3]);
        assert_eq!(world.entities[0].role, Role::Snaffle { grabbed: false });
        assert_eq!(world.entities[0].velocity, Vector::new(-100.0, 50.0));
        assert_eq!(world.entities[1].role, Role::Wizard { grabbing: true });
        assert_eq!(world.entities[2].role, Role::Bludger { chase_target: 2 });
    }

    #[test]
    fn test_unknown_entity_tag_is_skipped_silently() {
        let input = "0 0\n0 0\n2\n9 PORTKEY 100 100 0 0 0\n4 SNAFFLE 8000 3750 0 0 0\n";
        let world = reader(input).read_turn(TeamSide::Left).unwrap().unwrap();
        let ids: Vec<i32> = world.entities.iter().map(|entity| entity.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_clean_eof_at_frame_boundary_ends_session() {
        assert!(reader("").read_turn(TeamSide::Left).unwrap().is_none());
    }

    #[test]
    fn test_eof_mid_frame_is_fatal() {
        let input = "0 0\n0 0\n2\n4 SNAFFLE 8000 3750 0 0 0\n";
        assert!(matches!(
            reader(input).read_turn(TeamSide::Left),
            Err(BotError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_malformed_totals_line_is_fatal() {
        let result = reader("0 zero\n0 0\n0\n").read_turn(TeamSide::Left);
        assert!(matches!(result, Err(BotError::MalformedInput { .. })));
    }

    #[test]
    fn test_malformed_entity_record_is_fatal() {
        let input = "0 0\n0 0\n1\n4 SNAFFLE 8000 3750 0 0\n";
        let result = reader(input).read_turn(TeamSide::Left);
        assert!(matches!(result, Err(BotError::MalformedInput { .. })));
    }
}
