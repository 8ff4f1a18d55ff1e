//! Fixed world constants for the wizard ball arena.
//!
//! Tunable decision parameters live in [`crate::engine::config`]; this module
//! only holds facts the referee protocol treats as immutable.

/// Field dimensions.
pub mod field {
    /// Field length along the x axis, left goal line to right goal line.
    pub const LENGTH: f64 = 16000.0;
    /// Field width along the y axis.
    pub const WIDTH: f64 = 7500.0;
    /// Goal center height on the y axis.
    pub const CENTER_Y: f64 = 3750.0;
}

/// Goal placement.
pub mod goal {
    /// X coordinate of the goal defended by the left-side team (team id 0).
    pub const LEFT_X: f64 = 0.0;
    /// X coordinate of the goal defended by the right-side team (team id 1).
    pub const RIGHT_X: f64 = super::field::LENGTH;
}

/// Wizard roster facts.
pub mod wizard {
    /// Controlled wizards per team.
    pub const PER_TEAM: usize = 2;
}
