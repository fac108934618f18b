// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use crate::{
    command::{ConfigType, process_command},
    render::Stroke,
    turtle::{Ignored, Outcome},
    utils::{EPSILON, assert_approx_eq},
};
use vector_traits::glam::DVec2;

fn config(command: &str, program: &str) -> ConfigType {
    let mut config = ConfigType::new();
    let _ = config.insert("command".to_string(), command.to_string());
    let _ = config.insert("program".to_string(), program.to_string());
    config
}

#[test_log::test]
fn canvas_square() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_2d", "repeat 4; fd 100; rt 90; end"))?;
    assert_eq!(result.markup, None);
    assert_eq!(result.lines.len(), 4);
    assert_eq!(result.ignored(), 0);
    assert_approx_eq(result.lines[0].from, DVec2::new(500.0, 500.0), EPSILON);
    assert_approx_eq(result.lines[0].to, DVec2::new(500.0, 400.0), EPSILON);
    assert_approx_eq(result.lines[3].to, DVec2::new(500.0, 500.0), 1e-9);
    assert_eq!(result.lines[0].stroke, Stroke::default());
    Ok(())
}

#[test]
fn canvas_is_scaled_to_the_surface() -> Result<(), crate::TurtlrError> {
    let mut c = config("turtle_2d", "fd 100");
    let _ = c.insert("surface.width".to_string(), "500".to_string());
    let _ = c.insert("surface.height".to_string(), "500".to_string());
    let result = process_command(c)?;
    assert_approx_eq(result.lines[0].from, DVec2::new(250.0, 250.0), EPSILON);
    assert_approx_eq(result.lines[0].to, DVec2::new(250.0, 200.0), EPSILON);
    Ok(())
}

#[test]
fn space_only_commands_are_unknown_on_the_plane() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_2d", "ut 10; dt 10; cs; fd 10"))?;
    let outcomes: Vec<_> = result.reports.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Ignored(Ignored::UnknownCommand("ut".to_string())),
            Outcome::Ignored(Ignored::UnknownCommand("dt".to_string())),
            Outcome::Ignored(Ignored::UnknownCommand("cs".to_string())),
            Outcome::Applied,
        ]
    );
    assert_eq!(result.lines.len(), 1);
    Ok(())
}

#[test]
fn plane_fractals() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_2d", "koch 2 300"))?;
    assert_eq!(result.lines.len(), 3 * 16);

    let result = process_command(config("turtle_2d", "koch 6 300; sierp 7 300; sierp 2 200"))?;
    assert_eq!(result.ignored(), 2);
    assert_eq!(result.lines.len(), 24);
    Ok(())
}

#[test]
fn out_of_bounds_moves_are_skipped() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_2d", "fd 600; rt 90; fd 100"))?;
    assert_eq!(
        result.reports[0].outcome,
        Outcome::Ignored(Ignored::OutOfBounds)
    );
    assert_eq!(result.lines.len(), 1);
    assert_approx_eq(result.lines[0].to, DVec2::new(600.0, 500.0), EPSILON);
    Ok(())
}

#[test]
fn svg_markup() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_svg", "fd 100; sc red; ss 5; rt 90; fd 50"))?;
    let Some(markup) = result.markup else {
        panic!("svg markup is missing");
    };
    assert!(markup.starts_with("<svg"));
    assert!(markup.ends_with("</svg>"));
    assert!(markup.contains(
        r#"<line x1="250" y1="250" x2="250" y2="150" style="stroke: black; stroke-width: 2"/>"#
    ));
    assert!(markup.contains(r#"style="stroke: red; stroke-width: 5"/>"#));
    assert_eq!(markup.matches("<line").count(), 2);
    assert_eq!(result.lines[1].stroke, Stroke::new("red", 5.0));
    Ok(())
}

#[test]
fn style_values_are_validated() -> Result<(), crate::TurtlrError> {
    let result = process_command(config("turtle_svg", "ss 9; sc x\"y; fd 10"))?;
    assert_eq!(result.ignored(), 2);
    assert_eq!(result.lines[0].stroke, Stroke::new("black", 2.0));
    Ok(())
}
