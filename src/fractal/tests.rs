// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use super::*;
use crate::{
    render::LineBuffer,
    turtle::{Outcome, PlaneTurtle, SpaceTurtle},
    utils::{EPSILON, assert_approx_eq, wrap_heading},
};
use vector_traits::glam::{DVec2, DVec3};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Forward(f64),
    Left(f64),
    Right(f64),
    PenUp,
    PenDown,
}

/// An unbounded plane turtle that records every call.
#[derive(Default)]
struct Recorder {
    position: DVec2,
    heading: f64,
    pen_down: bool,
    ops: Vec<Op>,
    /// pen down moves
    strokes: Vec<(DVec2, DVec2)>,
}

impl Recorder {
    fn forwards(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Forward(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl Turtle for Recorder {
    type Pose = (DVec2, f64);

    fn forward(&mut self, distance: f64) -> Outcome {
        self.ops.push(Op::Forward(distance));
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let to = self.position + DVec2::new(sin, -cos) * distance;
        if self.pen_down {
            self.strokes.push((self.position, to));
        }
        self.position = to;
        Outcome::Applied
    }

    fn backward(&mut self, distance: f64) -> Outcome {
        self.forward(-distance)
    }

    fn turn_left(&mut self, degrees: f64) {
        self.ops.push(Op::Left(degrees));
        self.heading = wrap_heading(self.heading - degrees);
    }

    fn turn_right(&mut self, degrees: f64) {
        self.ops.push(Op::Right(degrees));
        self.heading = wrap_heading(self.heading + degrees);
    }

    fn pen_up(&mut self) {
        self.ops.push(Op::PenUp);
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.ops.push(Op::PenDown);
        self.pen_down = true;
    }

    fn pose(&self) -> Self::Pose {
        (self.position, self.heading)
    }

    fn set_pose(&mut self, pose: Self::Pose) {
        (self.position, self.heading) = pose;
    }
}

fn assert_heading(heading: f64, expected: f64) {
    let diff = (heading - expected).abs();
    assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "{heading} != {expected}");
}

#[test]
fn koch_level_zero_is_one_forward() {
    let mut r = Recorder::default();
    koch_curve(&mut r, 0, 90.0);
    assert_eq!(r.ops, vec![Op::Forward(90.0)]);
}

#[test]
fn koch_self_similarity() {
    for level in 0..=5_u32 {
        let mut r = Recorder::default();
        koch_curve(&mut r, level, 270.0);
        let forwards = r.forwards();
        assert_eq!(forwards.len(), 4_usize.pow(level));
        let step = 270.0 / 3.0_f64.powi(level as i32);
        for d in forwards {
            assert_approx_eq(d, step, EPSILON);
        }
        // the curve ends where a single straight move would have ended
        assert_approx_eq(r.position, DVec2::new(0.0, -270.0), 1e-9);
        assert_heading(r.heading, 0.0);
    }
}

#[test]
fn koch_first_level_shape() {
    let mut r = Recorder::default();
    koch_curve(&mut r, 1, 3.0);
    assert_eq!(
        r.ops,
        vec![
            Op::Forward(1.0),
            Op::Left(60.0),
            Op::Forward(1.0),
            Op::Right(120.0),
            Op::Forward(1.0),
            Op::Left(60.0),
            Op::Forward(1.0),
        ]
    );
}

#[test]
fn plane_snowflake_closes() {
    let mut r = Recorder {
        pen_down: true,
        ..Default::default()
    };
    koch_snowflake_plane(&mut r, 2, 300.0);
    assert_eq!(
        &r.ops[..5],
        &[
            Op::PenUp,
            Op::Left(90.0),
            Op::Forward(100.0),
            Op::Right(90.0),
            Op::PenDown
        ]
    );
    assert_eq!(r.strokes.len(), 3 * 16);
    assert_approx_eq(r.position, DVec2::new(-100.0, 0.0), 1e-9);
    assert_heading(r.heading, 0.0);
    assert!(r.pen_down);
}

#[test]
fn space_snowflake_restores_heading() {
    let mut r = Recorder::default();
    koch_snowflake_space(&mut r, 1, 90.0);
    assert_eq!(r.ops.first(), Some(&Op::Right(30.0)));
    assert_eq!(r.ops.last(), Some(&Op::Left(30.0)));
    assert_eq!(r.forwards().len(), 12);
    assert_approx_eq(r.position, DVec2::ZERO, 1e-9);
    assert_heading(r.heading, 0.0);
}

#[test]
fn sierpinski_outline_counts() {
    for (level, strokes) in [(0, 0), (1, 6), (2, 24), (3, 78)] {
        let mut r = Recorder {
            pen_down: true,
            ..Default::default()
        };
        sierpinski_outline(&mut r, level, 200.0);
        assert_eq!(r.strokes.len(), strokes, "level {level}");
        assert_eq!(&r.ops[..3], &[Op::PenUp, Op::Forward(300.0), Op::PenDown]);
    }
}

#[test]
fn sierpinski_outline_strokes_a_closed_triangle_first() {
    let mut r = Recorder {
        pen_down: true,
        ..Default::default()
    };
    sierpinski_outline(&mut r, 1, 200.0);
    let start = DVec2::new(0.0, -300.0);
    let (a, b, c) = (r.strokes[0], r.strokes[1], r.strokes[2]);
    assert_approx_eq(a.0, start, 1e-9);
    assert_approx_eq(a.1, b.0, 1e-9);
    assert_approx_eq(b.1, c.0, 1e-9);
    assert_approx_eq(c.1, start, 1e-9);
    for (from, to) in [a, b, c] {
        assert_approx_eq(from.distance(to), 200.0, 1e-9);
    }
}

#[test]
fn sierpinski_outline_on_a_surface() {
    let mut t = PlaneTurtle::new(LineBuffer::new(1000.0, 1000.0), 1000.0);
    sierpinski_outline(&mut t, 2, 200.0);
    assert_eq!(t.surface().lines().len(), 24);
}

#[test]
fn sierpinski_edges_counts_and_closure() {
    for (level, forwards) in [(0, 0), (1, 3), (2, 12), (3, 39)] {
        let mut r = Recorder::default();
        sierpinski_edges(&mut r, level, 100.0);
        assert_eq!(r.forwards().len(), forwards, "level {level}");
        assert_approx_eq(r.position, DVec2::ZERO, 1e-9);
        assert_heading(r.heading, 0.0);
    }
}

#[test]
fn space_sierpinski_draws_lines() {
    let mut t = SpaceTurtle::default();
    sierpinski_edges(&mut t, 2, 300.0);
    assert_eq!(t.shapes().len(), 12);
    assert_approx_eq(t.position(), DVec3::ZERO, 1e-9);
}
