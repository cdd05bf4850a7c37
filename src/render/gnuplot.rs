use std::{
    io::Write,
    path::{Path, PathBuf},
};

use super::{
    Render, Style, num, output_path, resolution, solution_points, visible_walls, write_file,
};
use crate::{
    error::RenderError,
    maze::{Border, Maze},
    topology::Bounds,
};

/// Renders a maze as a gnuplot script that draws it into a PNG file.
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    style: Style,
    draw_solution: bool,
    /// Image the script writes when run.
    image: PathBuf,
}

impl Default for GnuplotRenderer {
    fn default() -> Self {
        GnuplotRenderer::new(Style::default())
    }
}

impl GnuplotRenderer {
    pub fn new(style: Style) -> Self {
        GnuplotRenderer {
            style,
            draw_solution: false,
            image: PathBuf::from("maze.png"),
        }
    }

    /// Also draws the route from start to end.
    pub fn with_solution(mut self, draw_solution: bool) -> Self {
        self.draw_solution = draw_solution;
        self
    }

    /// Sets the PNG file the script produces.
    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = image.into();
        self
    }

    fn line_style(&self, color: &str) -> String {
        format!("lc rgb \"{color}\" lw {}", self.style.stroke_width)
    }

    fn wall(&self, border: &Border) -> String {
        let style = self.line_style(&self.style.stroke_color);
        match *border {
            Border::Line { x1, y1, x2, y2 } => format!(
                "set arrow from {},{} to {},{} nohead {style}",
                num(x1), num(y1), num(x2), num(y2)
            ),
            Border::Arc {
                cx,
                cy,
                r,
                theta1,
                theta2,
            } => format!(
                "set parametric; plot [{}:{}] {}+cos(t)*{r},{}+sin(t)*{r} w l {style} notitle; unset parametric",
                num(theta1), num(theta2), num(cx), num(cy), r = num(r),
            ),
        }
    }
}

impl Render for GnuplotRenderer {
    fn extension(&self) -> &'static str {
        "plt"
    }

    fn render(&self, maze: &Maze, bounds: Bounds, out: &mut dyn Write) -> Result<(), RenderError> {
        let (width, height) = resolution(bounds);

        writeln!(out, "unset border")?;
        writeln!(out, "unset tics")?;
        writeln!(out, "set samples 15")?;
        for (side, at) in [("l", 0), ("r", 1), ("b", 0), ("t", 1)] {
            writeln!(out, "set {side}margin at screen {at}")?;
        }
        writeln!(
            out,
            "set xrange[{}:{}]",
            num(bounds.xmin - 1.0), num(bounds.xmax + 1.0)
        )?;
        writeln!(
            out,
            "set yrange[{}:{}]",
            num(bounds.ymin - 1.0), num(bounds.ymax + 1.0)
        )?;
        writeln!(
            out,
            "set term pngcairo enhanced size {width},{height} background rgb \"{}\"",
            self.style.background_color
        )?;
        writeln!(out, "set output '{}'", self.image.display())?;
        writeln!(out, "set multiplot")?;

        let mut walls = 0;
        for border in visible_walls(maze) {
            writeln!(out, "{}", self.wall(border))?;
            walls += 1;
        }
        if self.draw_solution {
            let style = self.line_style(&self.style.solution_color);
            for pair in solution_points(maze).windows(2) {
                let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                writeln!(
                    out,
                    "set arrow from {},{} to {},{} nohead {style}",
                    num(x1), num(y1), num(x2), num(y2)
                )?;
            }
        }

        writeln!(out, "plot 1/0 notitle")?;
        writeln!(out, "unset multiplot")?;
        writeln!(out, "set output")?;
        tracing::debug!(walls, width, height, "rendered gnuplot script");
        Ok(())
    }

    /// Writes `<prefix>.plt`, set up to produce `<prefix>.png`.
    fn render_to_file(
        &self,
        maze: &Maze,
        bounds: Bounds,
        prefix: &Path,
    ) -> Result<PathBuf, RenderError> {
        let renderer = self.clone().with_image(output_path(prefix, "png"));
        let path = output_path(prefix, self.extension());
        write_file(&path, |out| renderer.render(maze, bounds, out))?;
        Ok(path)
    }
}
