// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use super::{Ignored, Outcome, Turtle};
use crate::{
    geo::{DEFAULT_COLOR, Point3D, Shape},
    utils::{is_style_token, wrap_heading, wrap_pitch},
};
use std::ops::RangeInclusive;
use vector_traits::glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacePose {
    pub position: Point3D,
    /// degrees, `[0, 360)`
    pub yaw: f64,
    /// degrees, `[-180, 180)`
    pub pitch: f64,
}

/// A 3D turtle. Its trace is a list of line [`Shape`]s, ready for the wireframe renderer.
///
/// With yaw and pitch at zero the turtle faces -Y. Yaw turns it in the XY plane, pitch lifts it
/// towards +Z.
#[derive(Debug, Clone)]
pub struct SpaceTurtle {
    position: Point3D,
    yaw: f64,
    pitch: f64,
    pen_down: bool,
    color: String,
    thickness: f64,
    shapes: Vec<Shape>,
}

impl Default for SpaceTurtle {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            pen_down: true,
            color: DEFAULT_COLOR.to_string(),
            thickness: 1.0,
            shapes: Vec::new(),
        }
    }
}

impl SpaceTurtle {
    /// The board is the cube `[-HALF_EXTENT, HALF_EXTENT]` on every axis, borders included.
    pub const HALF_EXTENT: f64 = 1000.0;
    /// Accepted stroke widths
    pub const THICKNESS: RangeInclusive<f64> = 1.0..=6.0;

    pub fn position(&self) -> Point3D {
        self.position
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Everything drawn so far, in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn turn_up(&mut self, degrees: f64) {
        self.pitch = wrap_pitch(self.pitch + degrees);
    }

    pub fn turn_down(&mut self, degrees: f64) {
        self.pitch = wrap_pitch(self.pitch - degrees);
    }

    pub fn set_color(&mut self, color: &str) -> Outcome {
        if !is_style_token(color) {
            return Ignored::InvalidStyle(color.to_string()).into();
        }
        self.color = color.to_string();
        Outcome::Applied
    }

    pub fn set_thickness(&mut self, width: f64) -> Outcome {
        if !Self::THICKNESS.contains(&width) {
            return Ignored::InvalidStyle(width.to_string()).into();
        }
        self.thickness = width;
        Outcome::Applied
    }

    /// Back to the origin with a level heading, and nothing drawn. Pen and style are kept.
    pub fn reset(&mut self) {
        self.position = DVec3::ZERO;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.shapes.clear();
    }

    fn in_bounds(p: Point3D) -> bool {
        p.abs().cmple(DVec3::splat(Self::HALF_EXTENT)).all()
    }

    fn displacement(&self, distance: f64) -> Point3D {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        DVec3::new(sin_yaw * cos_pitch, -cos_yaw * cos_pitch, sin_pitch) * distance
    }

    fn move_to(&mut self, destination: Point3D) -> Outcome {
        if !Self::in_bounds(destination) {
            log::debug!("move to {destination} is outside of the board, ignored");
            return Ignored::OutOfBounds.into();
        }
        if self.pen_down {
            self.shapes
                .push(Shape::line(self.position, destination, self.color.as_str()));
        }
        log::trace!("{} -> {}", self.position, destination);
        self.position = destination;
        Outcome::Applied
    }
}

impl Turtle for SpaceTurtle {
    type Pose = SpacePose;

    fn forward(&mut self, distance: f64) -> Outcome {
        self.move_to(self.position + self.displacement(distance))
    }

    fn backward(&mut self, distance: f64) -> Outcome {
        self.move_to(self.position - self.displacement(distance))
    }

    fn turn_left(&mut self, degrees: f64) {
        self.yaw = wrap_heading(self.yaw - degrees);
    }

    fn turn_right(&mut self, degrees: f64) {
        self.yaw = wrap_heading(self.yaw + degrees);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn pose(&self) -> SpacePose {
        SpacePose {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    fn set_pose(&mut self, pose: SpacePose) {
        self.position = pose.position;
        self.yaw = pose.yaw;
        self.pitch = pose.pitch;
    }
}
