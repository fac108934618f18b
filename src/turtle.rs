// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! The turtle state machines.
//!
//! A turtle is a cursor with a position, a heading and a pen. Relative motion commands move it,
//! and while the pen is down every move leaves a segment behind. [`PlaneTurtle`] draws straight
//! onto an injected [`crate::render::Surface`], [`SpaceTurtle`] collects line shapes for the
//! wireframe renderer.
//!
//! Nothing here ever fails. A move that would leave the board, or a style value that can not be
//! used, is dropped and reported as [`Outcome::Ignored`] with the reason.

mod plane;
mod space;

pub use plane::{PlanePose, PlaneTurtle};
pub use space::{SpacePose, SpaceTurtle};

/// Why a command was dropped without any effect.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Ignored {
    #[error("the destination is outside of the board")]
    OutOfBounds,

    #[error("unusable style value: {0}")]
    InvalidStyle(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("level {level} is above the ceiling of {ceiling}")]
    LevelAboveCeiling { level: u32, ceiling: u32 },

    #[error("missing argument")]
    MissingArgument,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("'end' without a matching 'repeat'")]
    StrayEnd,

    #[error("'repeat' blocks nested deeper than {ceiling}")]
    NestingTooDeep { ceiling: u32 },

    #[error("{iterations} iterations are above the ceiling of {ceiling}")]
    TooManyIterations { iterations: u64, ceiling: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<Ignored> for Outcome {
    fn from(reason: Ignored) -> Self {
        Outcome::Ignored(reason)
    }
}

/// The primitive operations the fractal generators are written against.
pub trait Turtle {
    /// Everything needed to put the turtle back where it was: position and heading.
    type Pose: Clone;

    fn forward(&mut self, distance: f64) -> Outcome;
    fn backward(&mut self, distance: f64) -> Outcome;
    fn turn_left(&mut self, degrees: f64);
    fn turn_right(&mut self, degrees: f64);
    fn pen_up(&mut self);
    fn pen_down(&mut self);
    fn pose(&self) -> Self::Pose;
    /// Teleports the turtle, nothing is drawn.
    fn set_pose(&mut self, pose: Self::Pose);
}
