// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use super::*;

fn config(pairs: &[(&str, &str)]) -> ConfigType {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn variant_defaults() -> Result<(), TurtlrError> {
    let plane = Settings::from_config(&config(&[("command", "turtle_2d")]))?;
    assert_eq!(plane, Settings::new(Variant::Plane));
    assert_eq!(plane.surface_size, DVec2::splat(1000.0));
    assert_eq!(plane.board_extent, 1000.0);
    assert_eq!(plane.limits, Limits::default());

    let svg = Settings::from_config(&config(&[("command", "turtle_svg")]))?;
    assert_eq!(svg.surface_size, DVec2::splat(500.0));
    assert_eq!(svg.board_extent, 500.0);

    let space = Settings::from_config(&config(&[("command", "turtle_3d")]))?;
    assert_eq!(space.surface_size, DVec2::new(800.0, 600.0));
    assert_eq!(space.camera_distance, 350.0);
    assert_eq!(space.drag, DVec2::ZERO);
    Ok(())
}

#[test]
fn overrides() -> Result<(), TurtlrError> {
    let settings = Settings::from_config(&config(&[
        ("command", "turtle_3d"),
        ("surface.width", "640"),
        ("surface.height", " 480 "),
        ("koch.max_level", "3"),
        ("sierp.max_level", "4"),
        ("repeat.max_depth", "8"),
        ("repeat.max_iterations", "500"),
        ("camera.distance", "500"),
        ("view.drag_x", "-12.5"),
    ]))?;
    assert_eq!(settings.surface_size, DVec2::new(640.0, 480.0));
    assert_eq!(
        settings.limits,
        Limits {
            koch: 3,
            sierpinski: 4,
            repeat_depth: 8,
            repeat_iterations: 500,
        }
    );
    assert_eq!(settings.camera_distance, 500.0);
    assert_eq!(settings.drag, DVec2::new(-12.5, 0.0));
    assert_eq!(settings.variant.to_string(), "turtle_3d");
    Ok(())
}

#[test]
fn bad_configurations() {
    assert!(matches!(
        Settings::from_config(&config(&[])),
        Err(TurtlrError::MissingParameter(_))
    ));
    assert!(matches!(
        Settings::from_config(&config(&[("command", "turtle_4d")])),
        Err(TurtlrError::InvalidParameter(_))
    ));
    assert!(matches!(
        Settings::from_config(&config(&[("command", "turtle_2d"), ("koch.max_level", "-1")])),
        Err(TurtlrError::InvalidParameter(_))
    ));
    for key in ["surface.width", "board.extent", "camera.distance"] {
        for value in ["0", "-3", "inf", "NaN"] {
            assert!(
                matches!(
                    Settings::from_config(&config(&[("command", "turtle_svg"), (key, value)])),
                    Err(TurtlrError::InvalidInputData(_))
                ),
                "{key}={value}"
            );
        }
    }
    assert!(matches!(
        process_command(config(&[("command", "turtle_2d")])),
        Err(TurtlrError::MissingParameter(_))
    ));
}

#[test]
fn limits_only_concern_fractals() {
    let limits = Limits::default();
    assert_eq!(limits.check(&Command::Forward(1e9)), Ok(()));
    assert_eq!(
        limits.check(&Command::Koch {
            level: 6,
            length: 1.0
        }),
        Err(Ignored::LevelAboveCeiling {
            level: 6,
            ceiling: 5
        })
    );
    assert_eq!(
        limits.check(&Command::Sierpinski {
            level: 6,
            length: 1.0
        }),
        Ok(())
    );
}

#[test]
fn result_counts_ignored_statements() -> Result<(), TurtlrError> {
    let result = process_command(config(&[
        ("command", "turtle_2d"),
        ("program", "fd 10; nope; fd 10000; rt 5"),
    ]))?;
    assert_eq!(result.reports.len(), 4);
    assert_eq!(result.ignored(), 2);
    assert_eq!(result.lines.len(), 1);
    Ok(())
}
