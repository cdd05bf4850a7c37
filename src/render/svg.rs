use std::io::Write;

use super::{Render, SCALE, Style, num, resolution, solution_points, visible_walls};
use crate::{
    error::RenderError,
    maze::{Border, Maze},
    topology::Bounds,
};

/// Renders a maze as a standalone SVG document.
///
/// Maze coordinates are scaled by [`SCALE`] and the y axis is flipped so
/// that it points up, like in the maze geometry.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    style: Style,
    draw_solution: bool,
}

impl SvgRenderer {
    pub fn new(style: Style) -> Self {
        SvgRenderer {
            style,
            draw_solution: false,
        }
    }

    /// Also draws the route from start to end.
    pub fn with_solution(mut self, draw_solution: bool) -> Self {
        self.draw_solution = draw_solution;
        self
    }

    fn wall(&self, border: &Border) -> String {
        let stroke = format!(
            "stroke=\"{}\" stroke-linecap=\"round\" stroke-width=\"{}\"",
            self.style.stroke_color, self.style.stroke_width
        );
        match *border {
            Border::Line { x1, y1, x2, y2 } => format!(
                "<line x1=\"{}\" x2=\"{}\" y1=\"{}\" y2=\"{}\" {stroke}/>",
                num(x1 * SCALE), num(x2 * SCALE), num(y1 * SCALE), num(y2 * SCALE),
            ),
            Border::Arc { r, .. } => {
                // Drawn from the end angle back to the start one
                let ((x1, y1), (x2, y2)) = border.endpoints();
                let radius = num(r * SCALE);
                format!(
                    "<path d=\"M {} {} A {radius} {radius}, 0, {}, 0, {} {}\" {stroke} fill=\"none\"/>",
                    num(x2 * SCALE),
                    num(y2 * SCALE),
                    u8::from(border.is_large_arc()),
                    num(x1 * SCALE),
                    num(y1 * SCALE),
                )
            }
        }
    }

    fn solution(&self, maze: &Maze) -> Option<String> {
        let points = solution_points(maze);
        if points.len() < 2 {
            return None;
        }
        let points = points
            .iter()
            .map(|&(x, y)| format!("{},{}", num(x * SCALE), num(y * SCALE)))
            .collect::<Vec<_>>()
            .join(" ");
        Some(format!(
            "<polyline points=\"{points}\" fill=\"none\" stroke=\"{}\" stroke-linecap=\"round\" \
             stroke-linejoin=\"round\" stroke-width=\"{}\"/>",
            self.style.solution_color, self.style.stroke_width
        ))
    }
}

impl Render for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, maze: &Maze, bounds: Bounds, out: &mut dyn Write) -> Result<(), RenderError> {
        let (width, height) = resolution(bounds);

        writeln!(
            out,
            "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">"
        )?;
        writeln!(
            out,
            "<g transform=\"translate({},{}) scale(1,-1)\">",
            num((1.0 - bounds.xmin) * SCALE), num(height as f64 - (1.0 - bounds.ymin) * SCALE)
        )?;
        writeln!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            num((bounds.xmin - 1.0) * SCALE),
            num((bounds.ymin - 1.0) * SCALE),
            self.style.background_color
        )?;

        let mut walls = 0;
        for border in visible_walls(maze) {
            writeln!(out, "{}", self.wall(border))?;
            walls += 1;
        }
        if self.draw_solution {
            if let Some(line) = self.solution(maze) {
                writeln!(out, "{line}")?;
            }
        }

        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;
        tracing::debug!(walls, width, height, "rendered svg");
        Ok(())
    }
}
