// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Wireframe shapes: an ordered list of vertices, edges as index pairs into that list, and a
//! stroke color. Shapes are immutable once built; transformations produce new shapes.


use smallvec::SmallVec;
use vector_traits::glam::{DVec2, DVec3};

pub type Point2D = DVec2;
pub type Point3D = DVec3;

/// The stroke color of shapes built without an explicit color.
pub const DEFAULT_COLOR: &str = "rgba(0,0,0,1)";

/// Edge list of a cube whose vertices are laid out as in [`Shape::cube`].
const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [1, 6],
    [2, 5],
    [3, 4],
    [0, 7],
];

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: SmallVec<[Point3D; 8]>,
    edges: SmallVec<[[usize; 2]; 12]>,
    color: String,
    /// min and max corner, only known for untransformed cubes
    aabb: Option<[Point3D; 2]>,
}

impl Shape {
    /// An axis aligned cube centered at `center` with edge length `size`.
    pub fn cube(center: Point3D, size: f64, color: impl Into<String>) -> Self {
        let d = size / 2.0;
        let min = center - DVec3::splat(d);
        let max = center + DVec3::splat(d);
        let vertices = SmallVec::from_buf([
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(max.x, max.y, max.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(min.x, max.y, max.z),
        ]);
        Self {
            vertices,
            edges: SmallVec::from_buf(CUBE_EDGES),
            color: color.into(),
            aabb: Some([min, max]),
        }
    }

    /// A single segment from `p1` to `p2`.
    pub fn line(p1: Point3D, p2: Point3D, color: impl Into<String>) -> Self {
        let mut vertices = SmallVec::new();
        vertices.extend([p1, p2]);
        let mut edges = SmallVec::new();
        edges.push([0, 1]);
        Self {
            vertices,
            edges,
            color: color.into(),
            aabb: None,
        }
    }

    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Iterates over the end points of every edge.
    pub fn segments(&self) -> impl Iterator<Item = (Point3D, Point3D)> + '_ {
        self.edges
            .iter()
            .map(|[a, b]| (self.vertices[*a], self.vertices[*b]))
    }

    /// Returns true if `point` lies inside, or on the surface of, this cube.
    /// Lines, and shapes produced by [`Shape::map_vertices`], never contain a point.
    pub fn contains_point(&self, point: Point3D) -> bool {
        self.aabb
            .is_some_and(|[min, max]| point.cmpge(min).all() && point.cmple(max).all())
    }

    /// Builds a new shape with every vertex passed through `f`. Edges and color are kept.
    pub fn map_vertices(&self, f: impl Fn(Point3D) -> Point3D) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| f(*v)).collect(),
            edges: self.edges.clone(),
            color: self.color.clone(),
            aabb: None,
        }
    }
}
