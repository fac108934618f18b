// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Koch and Sierpinski generators, written against the [`Turtle`] trait.
//!
//! The generators recurse directly and do not check their level. Callers are expected to bound
//! it, see [`crate::command::Limits`].

#[cfg(test)]
mod tests;

use crate::turtle::Turtle;

/// One Koch curve: a single forward move at level 0, otherwise four curves of a third of the
/// length with a 60 degree bump to the left in the middle.
pub fn koch_curve<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    if level == 0 {
        let _ = turtle.forward(length);
        return;
    }
    let third = length / 3.0;
    koch_curve(turtle, level - 1, third);
    turtle.turn_left(60.0);
    koch_curve(turtle, level - 1, third);
    turtle.turn_right(120.0);
    koch_curve(turtle, level - 1, third);
    turtle.turn_left(60.0);
    koch_curve(turtle, level - 1, third);
}

/// Snowflake on the plane: steps 100 units to the left with the pen up, then draws three curves
/// turning 120 degrees right after each one. Leaves the pen down.
pub fn koch_snowflake_plane<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    turtle.pen_up();
    turtle.turn_left(90.0);
    let _ = turtle.forward(100.0);
    turtle.turn_right(90.0);
    turtle.pen_down();

    for _ in 0..3 {
        koch_curve(turtle, level, length);
        turtle.turn_right(120.0);
    }
}

/// Snowflake in space: three curves with 120 degree right turns, framed by a 30 degree turn so
/// the flake sits upright. The heading is restored afterwards.
pub fn koch_snowflake_space<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    turtle.turn_right(30.0);
    for _ in 0..3 {
        koch_curve(turtle, level, length);
        turtle.turn_right(120.0);
    }
    turtle.turn_left(30.0);
}

/// Sierpinski triangle on the plane. Moves 300 units forward with the pen up, then strokes the
/// outer triangle and recurses into the three half sized corner triangles.
pub fn sierpinski_outline<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    let height = length * 3.0_f64.sqrt() / 2.0;
    turtle.pen_up();
    let _ = turtle.forward(300.0);
    turtle.pen_down();
    outline(turtle, level, length, height);
}

fn outline<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64, height: f64) {
    if level == 0 {
        return;
    }
    let half = length / 2.0;

    turtle.turn_left(150.0);
    let _ = turtle.forward(length);
    turtle.turn_left(120.0);
    let _ = turtle.forward(length);
    turtle.turn_left(120.0);
    let _ = turtle.forward(length);
    turtle.turn_left(150.0);

    // upper
    let anchor = turtle.pose();
    turtle.turn_right(180.0);
    outline(turtle, level - 1, half, height / 2.0);
    turtle.set_pose(anchor);

    turtle.pen_up();
    let _ = turtle.forward(height);
    turtle.pen_down();
    turtle.turn_left(150.0);
    let _ = turtle.forward(half);

    // right
    let anchor = turtle.pose();
    turtle.turn_right(330.0);
    outline(turtle, level - 1, half, height / 2.0);
    turtle.set_pose(anchor);

    turtle.turn_left(120.0);
    let _ = turtle.forward(half);

    // left
    let anchor = turtle.pose();
    turtle.turn_left(270.0);
    outline(turtle, level - 1, half, height / 2.0);
    turtle.set_pose(anchor);

    turtle.turn_left(120.0);
    let _ = turtle.forward(half);
}

/// Sierpinski triangle in space: at every level, recurse at half the length and then stroke
/// one edge, three times. There is no pose bookkeeping, the turtle relies on every sub
/// triangle ending where it started.
pub fn sierpinski_edges<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    turtle.turn_right(30.0);
    edges(turtle, level, length);
    turtle.turn_left(30.0);
}

fn edges<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: f64) {
    if level == 0 {
        return;
    }
    for _ in 0..3 {
        edges(turtle, level - 1, length / 2.0);
        let _ = turtle.forward(length);
        turtle.turn_right(120.0);
    }
}
