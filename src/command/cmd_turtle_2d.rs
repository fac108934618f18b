// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! The 2D turtle, drawing either into a line buffer or into an SVG document.

#[cfg(test)]
mod tests;

use super::{
    CommandResult, Settings, Variant,
    interpreter::{Interpreter, Session},
    parser::Command,
};
use crate::{
    fractal::{koch_snowflake_plane, sierpinski_outline},
    render::{LineBuffer, Stroke, Surface, SvgDocument},
    turtle::{Ignored, Outcome, PlaneTurtle, Turtle},
};

impl<S: Surface> Session for PlaneTurtle<S> {
    fn apply(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Forward(distance) => self.forward(*distance),
            Command::Backward(distance) => self.backward(*distance),
            Command::Right(degrees) => {
                self.turn_right(*degrees);
                Outcome::Applied
            }
            Command::Left(degrees) => {
                self.turn_left(*degrees);
                Outcome::Applied
            }
            Command::PenUp => {
                self.pen_up();
                Outcome::Applied
            }
            Command::PenDown => {
                self.pen_down();
                Outcome::Applied
            }
            Command::SetColor(color) => self.set_color(color),
            Command::SetThickness(width) => self.set_thickness(*width),
            Command::Koch { level, length } => {
                koch_snowflake_plane(self, *level, *length);
                Outcome::Applied
            }
            Command::Sierpinski { level, length } => {
                sierpinski_outline(self, *level, *length);
                Outcome::Applied
            }
            Command::Up(_) | Command::Down(_) | Command::ClearScreen => {
                Ignored::UnknownCommand(command.name().to_string()).into()
            }
        }
    }
}

/// Runs `program` on a fresh plane turtle. [`Variant::Svg`] starts with a black 2 pixel stroke
/// and returns the document markup as well.
pub(crate) fn process_command(settings: &Settings, program: &str) -> CommandResult {
    let interpreter = Interpreter::new(settings.limits);
    let size = settings.surface_size;

    if settings.variant == Variant::Svg {
        let mut turtle = PlaneTurtle::new(SvgDocument::new(size.x, size.y), settings.board_extent)
            .with_stroke(Stroke::new("black", 2.0));
        let reports = interpreter.run(&mut turtle, program);
        let document = turtle.into_surface();
        CommandResult {
            markup: Some(document.to_svg()),
            lines: document.lines().to_vec(),
            reports,
        }
    } else {
        let mut turtle = PlaneTurtle::new(LineBuffer::new(size.x, size.y), settings.board_extent);
        let reports = interpreter.run(&mut turtle, program);
        CommandResult {
            lines: turtle.into_surface().into_lines(),
            markup: None,
            reports,
        }
    }
}
