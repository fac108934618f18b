// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! The 3D turtle, seen through an orbiting perspective camera.


use super::{
    CommandResult, Settings,
    interpreter::{Interpreter, Session},
    parser::Command,
};
use crate::{
    fractal::{koch_snowflake_space, sierpinski_edges},
    geo::Point3D,
    render::{Camera, Engine, LineBuffer, Orbit, PerspectiveProjection, Surface, rotate_shapes},
    turtle::{Outcome, SpaceTurtle, Turtle},
};
use vector_traits::glam::{DVec2, DVec3};

/// A [`SpaceTurtle`] together with the view it is rendered through.
///
/// The surface is redrawn from scratch at the end of every batch and after every drag. The
/// turtle's own shapes are never modified, each frame rotates copies of them about the origin.
#[derive(Debug)]
pub struct SpaceSession<S: Surface> {
    turtle: SpaceTurtle,
    orbit: Orbit,
    camera: Camera,
    engine: Engine,
    surface: S,
}

impl<S: Surface> SpaceSession<S> {
    pub const CAMERA_POSITION: Point3D = DVec3::new(0.0, -2000.0, 0.0);
    pub const FOCAL_DISTANCE: f64 = 350.0;

    pub fn new(surface: S) -> Self {
        Self::with_focal_distance(surface, Self::FOCAL_DISTANCE)
    }

    pub fn with_focal_distance(surface: S, focal_distance: f64) -> Self {
        Self {
            turtle: SpaceTurtle::default(),
            orbit: Orbit::default(),
            camera: Camera::new(Self::CAMERA_POSITION, focal_distance, PerspectiveProjection),
            engine: Engine::default(),
            surface,
        }
    }

    pub fn turtle(&self) -> &SpaceTurtle {
        &self.turtle
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Adds a pointer drag to the view and redraws. Returns the number of lines drawn.
    pub fn drag(&mut self, dx: f64, dy: f64) -> usize {
        self.orbit.drag(dx, dy);
        self.redraw()
    }

    /// Replaces the camera with one at `position` and redraws.
    pub fn move_camera(&mut self, position: Point3D) -> usize {
        self.camera = self.camera.moved_to(position);
        self.redraw()
    }

    /// Renders the turtle's shapes with the current view, drawn with the turtle's thickness.
    pub fn redraw(&mut self) -> usize {
        let shapes = rotate_shapes(
            self.turtle.shapes(),
            DVec3::ZERO,
            self.orbit.yaw(),
            self.orbit.pitch(),
        );
        self.engine.set_line_width(self.turtle.thickness());
        self.engine.render(&shapes, &self.camera, &mut self.surface)
    }

    /// `cs`: turtle, view and camera go back to their initial state, the surface is blanked.
    /// The camera keeps its zoom.
    fn clear_screen(&mut self) {
        self.turtle.reset();
        self.orbit.reset();
        self.camera = self.camera.moved_to(Self::CAMERA_POSITION);
        self.surface.clear();
    }
}

impl<S: Surface> Session for SpaceSession<S> {
    fn apply(&mut self, command: &Command) -> Outcome {
        let turtle = &mut self.turtle;
        match command {
            Command::Forward(distance) => return turtle.forward(*distance),
            Command::Backward(distance) => return turtle.backward(*distance),
            Command::Right(degrees) => turtle.turn_right(*degrees),
            Command::Left(degrees) => turtle.turn_left(*degrees),
            Command::Up(degrees) => turtle.turn_up(*degrees),
            Command::Down(degrees) => turtle.turn_down(*degrees),
            Command::PenUp => turtle.pen_up(),
            Command::PenDown => turtle.pen_down(),
            Command::SetColor(color) => return turtle.set_color(color),
            Command::SetThickness(width) => return turtle.set_thickness(*width),
            Command::Koch { level, length } => koch_snowflake_space(turtle, *level, *length),
            Command::Sierpinski { level, length } => sierpinski_edges(turtle, *level, *length),
            Command::ClearScreen => self.clear_screen(),
        }
        Outcome::Applied
    }

    fn finish(&mut self) {
        let lines = self.redraw();
        log::debug!(
            "{} shapes on screen as {} lines",
            self.turtle.shapes().len(),
            lines
        );
    }
}

/// Runs `program` on a fresh 3D session, then applies the configured drag.
pub(crate) fn process_command(settings: &Settings, program: &str) -> CommandResult {
    let size = settings.surface_size;
    let mut session = SpaceSession::with_focal_distance(
        LineBuffer::new(size.x, size.y),
        settings.camera_distance,
    );
    let reports = Interpreter::new(settings.limits).run(&mut session, program);
    if settings.drag != DVec2::ZERO {
        let _ = session.drag(settings.drag.x, settings.drag.y);
    }
    CommandResult {
        lines: session.into_surface().into_lines(),
        markup: None,
        reports,
    }
}
