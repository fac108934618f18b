// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Drawing surfaces, perspective projection and the wireframe renderer.

mod svg;

use crate::geo::{DEFAULT_COLOR, Point2D, Point3D, Shape};
use std::f64::consts::PI;
use vector_traits::glam::{DMat3, DVec2};

pub use svg::SvgDocument;

/// The style a line is stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLine {
    pub from: Point2D,
    pub to: Point2D,
    pub stroke: Stroke,
}

/// Something lines can be drawn onto. The core never owns a surface, it is always injected.
pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> Point2D;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn draw_line(&mut self, from: Point2D, to: Point2D, stroke: &Stroke);
}

/// A surface that just remembers what was drawn on it.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    size: Point2D,
    lines: Vec<DrawnLine>,
}

impl LineBuffer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<DrawnLine> {
        self.lines
    }
}

impl Surface for LineBuffer {
    fn size(&self) -> Point2D {
        self.size
    }

    fn clear(&mut self) {
        self.lines.clear()
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, stroke: &Stroke) {
        self.lines.push(DrawnLine {
            from,
            to,
            stroke: stroke.clone(),
        })
    }
}

/// A projected vertex: screen coordinates plus what is left of the depth axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub screen: Point2D,
    pub depth: f64,
}

impl ProjectedPoint {
    /// Points at, or behind, the camera are never drawn.
    pub fn is_visible(&self) -> bool {
        self.depth > 0.0
    }
}

pub trait Projection {
    fn project(&self, point: Point3D, eye: Point3D, focal_distance: f64) -> ProjectedPoint;
}

/// Looks down the +Y axis; +X is screen right and +Z is screen up.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PerspectiveProjection;

impl Projection for PerspectiveProjection {
    fn project(&self, point: Point3D, eye: Point3D, focal_distance: f64) -> ProjectedPoint {
        let d = point - eye;
        let r = focal_distance / d.y;
        ProjectedPoint {
            screen: DVec2::new(r * d.x, r * d.z),
            depth: d.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera<P: Projection = PerspectiveProjection> {
    position: Point3D,
    /// zoom
    focal_distance: f64,
    projection: P,
}

impl<P: Projection> Camera<P> {
    pub fn new(position: Point3D, focal_distance: f64, projection: P) -> Self {
        Self {
            position,
            focal_distance,
            projection,
        }
    }

    pub fn position(&self) -> Point3D {
        self.position
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    pub fn project(&self, vertex: Point3D) -> ProjectedPoint {
        self.projection.project(vertex, self.position, self.focal_distance)
    }
}

impl<P: Projection + Clone> Camera<P> {
    /// A new camera with the same zoom and projection, placed at `position`.
    pub fn moved_to(&self, position: Point3D) -> Self {
        Self::new(position, self.focal_distance, self.projection.clone())
    }
}

/// Rotates `point` about `center`: first `pitch` radians around X, then `yaw` radians around Z.
pub fn rotate(point: Point3D, center: Point3D, yaw: f64, pitch: f64) -> Point3D {
    orbit_matrix(yaw, pitch) * (point - center) + center
}

/// Returns rotated copies of `shapes`, the input is left as it is.
pub fn rotate_shapes(shapes: &[Shape], center: Point3D, yaw: f64, pitch: f64) -> Vec<Shape> {
    let m = orbit_matrix(yaw, pitch);
    shapes
        .iter()
        .map(|shape| shape.map_vertices(|v| m * (v - center) + center))
        .collect()
}

fn orbit_matrix(yaw: f64, pitch: f64) -> DMat3 {
    DMat3::from_rotation_z(yaw) * DMat3::from_rotation_x(pitch)
}

/// Accumulated pointer drag, translated into view angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    drag: DVec2,
}

impl Orbit {
    /// Initial vertical drag; puts the turtle's XY plane face on to the camera.
    const INITIAL_DRAG: DVec2 = DVec2::new(0.0, -90.0);

    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.drag += DVec2::new(dx, dy);
    }

    pub fn reset(&mut self) {
        self.drag = Self::INITIAL_DRAG;
    }

    /// Horizontal drag, half a degree per unit.
    pub fn yaw(&self) -> f64 {
        self.drag.x * PI / 360.0
    }

    /// Vertical drag, one degree per unit.
    pub fn pitch(&self) -> f64 {
        self.drag.y * PI / 180.0
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            drag: Self::INITIAL_DRAG,
        }
    }
}

/// Draws wireframe shapes through a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    line_width: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self { line_width: 1.0 }
    }
}

impl Engine {
    pub fn with_line_width(line_width: f64) -> Self {
        Self { line_width }
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    /// Clears `surface` and draws every edge of every shape whose two end points are both in
    /// front of the camera. Returns the number of lines drawn.
    pub fn render<P, S>(&self, shapes: &[Shape], camera: &Camera<P>, surface: &mut S) -> usize
    where
        P: Projection,
        S: Surface + ?Sized,
    {
        let half = surface.size() / 2.0;
        let to_screen = |p: ProjectedPoint| DVec2::new(p.screen.x + half.x, -p.screen.y + half.y);
        surface.clear();

        let mut drawn = 0;
        for shape in shapes {
            let stroke = Stroke::new(shape.color(), self.line_width);
            for (a, b) in shape.segments() {
                let p1 = camera.project(a);
                let p2 = camera.project(b);
                if !(p1.is_visible() && p2.is_visible()) {
                    continue;
                }
                surface.draw_line(to_screen(p1), to_screen(p2), &stroke);
                drawn += 1;
            }
        }
        log::trace!("rendered {} shapes as {} lines", shapes.len(), drawn);
        drawn
    }
}
