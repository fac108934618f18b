// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Configuration handling and the `process_command` entry point.
//!
//! A run is described by a flat string map, the same way every command is configured:
//! `"command"` selects the variant, `"program"` holds the turtle source and the remaining keys
//! tune the surface, the fractal ceilings and the 3D view.

pub mod cmd_turtle_2d;
pub mod cmd_turtle_3d;
mod impls;
pub mod interpreter;
pub mod parser;

#[cfg(test)]
mod tests;

use crate::{TurtlrError, geo::Point2D, render::DrawnLine, turtle::Ignored};
use interpreter::StatementReport;
use parser::Command;
use std::{collections::HashMap, fmt, str::FromStr, time::Instant};
use vector_traits::glam::DVec2;

trait Options {
    /// Will return an option parsed as a `T` or an Err
    fn get_mandatory_parsed_option<T: FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, TurtlrError>;

    /// Will return an option parsed as a `T` or None.
    /// If the option is missing None is returned, if it there but if it can't be parsed an error
    /// will be returned.
    fn get_parsed_option<T: FromStr>(&self, key: &str) -> Result<Option<T>, TurtlrError>;

    /// Returns the &str value of an option, or an Err is it does not exists
    fn get_mandatory_option(&self, key: &str) -> Result<&str, TurtlrError>;
}

pub type ConfigType = HashMap<String, String>;

/// The three turtle flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 2D turtle drawing line segments
    Plane,
    /// 2D turtle writing SVG markup
    Svg,
    /// 3D turtle seen through a perspective camera
    Space,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Plane => "turtle_2d",
            Variant::Svg => "turtle_svg",
            Variant::Space => "turtle_3d",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = TurtlrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "turtle_2d" => Ok(Variant::Plane),
            "turtle_svg" => Ok(Variant::Svg),
            "turtle_3d" => Ok(Variant::Space),
            illegal_command => Err(TurtlrError::InvalidParameter(format!(
                "Invalid command:{illegal_command}"
            ))),
        }
    }
}

/// Highest accepted fractal levels, and how far `repeat` may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub koch: u32,
    pub sierpinski: u32,
    /// deepest accepted `repeat` nesting
    pub repeat_depth: u32,
    /// most iterations of one block, counting the iterations of every enclosing block
    pub repeat_iterations: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            koch: 5,
            sierpinski: 6,
            repeat_depth: 64,
            repeat_iterations: 10_000,
        }
    }
}

impl Limits {
    /// Rejects fractal commands above their ceiling, everything else passes.
    pub fn check(&self, command: &Command) -> Result<(), Ignored> {
        let (level, ceiling) = match command {
            Command::Koch { level, .. } => (*level, self.koch),
            Command::Sierpinski { level, .. } => (*level, self.sierpinski),
            _ => return Ok(()),
        };
        if level > ceiling {
            return Err(Ignored::LevelAboveCeiling { level, ceiling });
        }
        Ok(())
    }
}

/// Everything a run needs besides the program itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: Variant,
    /// pixels
    pub surface_size: Point2D,
    /// board units spanning the surface width, unused by [`Variant::Space`]
    pub board_extent: f64,
    pub limits: Limits,
    /// focal distance of the 3D camera
    pub camera_distance: f64,
    /// accumulated mouse drag applied to the 3D view before the first frame
    pub drag: DVec2,
}

impl Settings {
    /// The defaults of a variant
    pub fn new(variant: Variant) -> Self {
        let (surface_size, board_extent) = match variant {
            Variant::Plane => (DVec2::splat(1000.0), 1000.0),
            Variant::Svg => (DVec2::splat(500.0), 500.0),
            Variant::Space => (DVec2::new(800.0, 600.0), 1000.0),
        };
        Self {
            variant,
            surface_size,
            board_extent,
            limits: Limits::default(),
            camera_distance: 350.0,
            drag: DVec2::ZERO,
        }
    }

    pub fn from_config(config: &ConfigType) -> Result<Self, TurtlrError> {
        let variant: Variant = config.get_mandatory_option("command")?.parse()?;
        let d = Self::new(variant);

        let settings = Self {
            variant,
            surface_size: DVec2::new(
                config.get_mandatory_parsed_option("surface.width", Some(d.surface_size.x))?,
                config.get_mandatory_parsed_option("surface.height", Some(d.surface_size.y))?,
            ),
            board_extent: config
                .get_mandatory_parsed_option("board.extent", Some(d.board_extent))?,
            limits: Limits {
                koch: config.get_mandatory_parsed_option("koch.max_level", Some(d.limits.koch))?,
                sierpinski: config
                    .get_mandatory_parsed_option("sierp.max_level", Some(d.limits.sierpinski))?,
                repeat_depth: config
                    .get_mandatory_parsed_option("repeat.max_depth", Some(d.limits.repeat_depth))?,
                repeat_iterations: config.get_mandatory_parsed_option(
                    "repeat.max_iterations",
                    Some(d.limits.repeat_iterations),
                )?,
            },
            camera_distance: config
                .get_mandatory_parsed_option("camera.distance", Some(d.camera_distance))?,
            drag: DVec2::new(
                config.get_parsed_option("view.drag_x")?.unwrap_or(0.0),
                config.get_parsed_option("view.drag_y")?.unwrap_or(0.0),
            ),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), TurtlrError> {
        for (key, value) in [
            ("surface.width", self.surface_size.x),
            ("surface.height", self.surface_size.y),
            ("board.extent", self.board_extent),
            ("camera.distance", self.camera_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TurtlrError::InvalidInputData(format!(
                    "\"{key}\" must be a positive number, got {value}"
                )));
            }
        }
        if !self.drag.is_finite() {
            return Err(TurtlrError::InvalidInputData(format!(
                "The view drag must be finite, got {}",
                self.drag
            )));
        }
        Ok(())
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// every line on the surface, in drawing order
    pub lines: Vec<DrawnLine>,
    /// complete SVG document, [`Variant::Svg`] only
    pub markup: Option<String>,
    /// one entry per executed statement
    pub reports: Vec<StatementReport>,
}

impl CommandResult {
    /// Number of statements that had no effect
    pub fn ignored(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| !r.outcome.is_applied())
            .count()
    }
}

/// Runs the `"program"` of `config` on a fresh turtle of the selected variant.
pub fn process_command(config: ConfigType) -> Result<CommandResult, TurtlrError> {
    let settings = Settings::from_config(&config)?;
    let program = config.get_mandatory_option("program")?;

    let start = Instant::now();
    let result = match settings.variant {
        Variant::Plane | Variant::Svg => cmd_turtle_2d::process_command(&settings, program),
        Variant::Space => cmd_turtle_3d::process_command(&settings, program),
    };
    log::info!(
        "{} ran {} statements, {} ignored, {} lines in {:?}",
        settings.variant,
        result.reports.len(),
        result.ignored(),
        result.lines.len(),
        start.elapsed()
    );
    Ok(result)
}
