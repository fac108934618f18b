// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use super::{Ignored, Outcome, Turtle};
use crate::{
    geo::Point2D,
    render::{Stroke, Surface},
    utils::{is_style_token, wrap_heading},
};
use std::ops::RangeInclusive;
use vector_traits::glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePose {
    pub position: Point2D,
    /// degrees, clockwise, 0 is up
    pub heading: f64,
}

/// A 2D turtle drawing directly onto a surface.
///
/// Distances are given in board units and scaled by `surface width / board extent`. The turtle
/// starts in the middle of the surface facing up, and may only move strictly inside it.
#[derive(Debug)]
pub struct PlaneTurtle<S: Surface> {
    surface: S,
    position: Point2D,
    heading: f64,
    pen_down: bool,
    stroke: Stroke,
    scale: f64,
}

impl<S: Surface> PlaneTurtle<S> {
    /// Accepted stroke widths
    pub const THICKNESS: RangeInclusive<f64> = 1.0..=7.0;

    pub fn new(surface: S, board_extent: f64) -> Self {
        let size = surface.size();
        Self {
            position: size / 2.0,
            heading: 0.0,
            pen_down: true,
            stroke: Stroke::default(),
            scale: size.x / board_extent,
            surface,
        }
    }

    /// Replaces the initial stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn set_color(&mut self, color: &str) -> Outcome {
        if !is_style_token(color) {
            return Ignored::InvalidStyle(color.to_string()).into();
        }
        self.stroke.color = color.to_string();
        Outcome::Applied
    }

    pub fn set_thickness(&mut self, width: f64) -> Outcome {
        if !Self::THICKNESS.contains(&width) {
            return Ignored::InvalidStyle(width.to_string()).into();
        }
        self.stroke.width = width;
        Outcome::Applied
    }

    /// Back to the center, facing up, with a blank surface. Pen and stroke are kept.
    pub fn reset(&mut self) {
        self.position = self.surface.size() / 2.0;
        self.heading = 0.0;
        self.surface.clear();
    }

    fn in_bounds(&self, p: Point2D) -> bool {
        let size = self.surface.size();
        p.x > 0.0 && p.x < size.x && p.y > 0.0 && p.y < size.y
    }

    /// Screen space displacement of a forward move, y grows downwards.
    fn displacement(&self, distance: f64) -> Point2D {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        DVec2::new(sin, -cos) * (distance * self.scale)
    }

    fn move_to(&mut self, destination: Point2D) -> Outcome {
        if !self.in_bounds(destination) {
            log::debug!("move to {destination} is outside of the board, ignored");
            return Ignored::OutOfBounds.into();
        }
        if self.pen_down {
            self.surface.draw_line(self.position, destination, &self.stroke);
        }
        log::trace!("{} -> {}", self.position, destination);
        self.position = destination;
        Outcome::Applied
    }
}

impl<S: Surface> Turtle for PlaneTurtle<S> {
    type Pose = PlanePose;

    fn forward(&mut self, distance: f64) -> Outcome {
        self.move_to(self.position + self.displacement(distance))
    }

    fn backward(&mut self, distance: f64) -> Outcome {
        self.move_to(self.position - self.displacement(distance))
    }

    fn turn_left(&mut self, degrees: f64) {
        self.heading = wrap_heading(self.heading - degrees);
    }

    fn turn_right(&mut self, degrees: f64) {
        self.heading = wrap_heading(self.heading + degrees);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn pose(&self) -> PlanePose {
        PlanePose {
            position: self.position,
            heading: self.heading,
        }
    }

    fn set_pose(&mut self, pose: PlanePose) {
        self.position = pose.position;
        self.heading = pose.heading;
    }
}
