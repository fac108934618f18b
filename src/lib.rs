// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible,
    non_camel_case_types,
    unused_parens,
    non_upper_case_globals,
    unused_qualifications,
    unused_results,
    unused_imports,
    unused_variables,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    elided_lifetimes_in_paths
)]
#![warn(clippy::explicit_into_iter_loop)]

//! Turtle graphics in Rust: a small command language driving a 2D or 3D turtle, Koch and
//! Sierpinski generators built on top of it, and a perspective wireframe renderer.
//!
//! Design guideline: the core never owns a drawing surface. Everything that is drawn goes through
//! the [`render::Surface`] trait, and every turtle lives in an explicit value, so any number of
//! independent sessions can exist side by side.
//!
//! The command language is best-effort: a bad statement is reported as
//! [`turtle::Outcome::Ignored`] and the rest of the batch keeps running. [`TurtlrError`] is only
//! produced by the configuration layer.

pub mod command;
pub mod fractal;
pub mod geo;
pub mod render;
pub mod turtle;
pub(crate) mod utils;

pub mod prelude {
    pub use crate::{
        TurtlrError,
        command::{
            CommandResult, ConfigType, Limits, Settings, Variant,
            cmd_turtle_3d::SpaceSession,
            interpreter::{Interpreter, Session, StatementReport},
            parser::{Command, Statement, parse, parse_with_depth},
            process_command,
        },
        geo::{DEFAULT_COLOR, Point2D, Point3D, Shape},
        render::{
            Camera, DrawnLine, Engine, LineBuffer, Orbit, PerspectiveProjection, ProjectedPoint,
            Projection, Stroke, Surface, SvgDocument, rotate, rotate_shapes,
        },
        turtle::{Ignored, Outcome, PlaneTurtle, SpaceTurtle, Turtle},
    };
}

#[derive(thiserror::Error, Debug)]
pub enum TurtlrError {
    #[error("Invalid input data: {0}")]
    InvalidParameter(String),

    #[error("Invalid input data value: {0}")]
    InvalidInputData(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}
