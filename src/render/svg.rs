// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

use super::{DrawnLine, Stroke, Surface};
use crate::geo::Point2D;
use std::fmt::Write;
use vector_traits::glam::DVec2;

/// A surface that appends one `<line>` element per drawn segment.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    size: Point2D,
    body: String,
    lines: Vec<DrawnLine>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            body: String::new(),
            lines: Vec::new(),
        }
    }

    /// The `<line>` elements drawn so far, without the enclosing `<svg>` element.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }

    /// A complete, standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 128);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.x,
            h = self.size.y
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl Surface for SvgDocument {
    fn size(&self) -> Point2D {
        self.size
    }

    fn clear(&mut self) {
        self.body.clear();
        self.lines.clear();
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, stroke: &Stroke) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="stroke: {}; stroke-width: {}"/>"#,
            from.x, from.y, to.x, to.y, stroke.color, stroke.width
        );
        self.lines.push(DrawnLine {
            from,
            to,
            stroke: stroke.clone(),
        });
    }
}
