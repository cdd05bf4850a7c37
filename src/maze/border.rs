use std::f64::consts::PI;

/// Geometry of a single wall segment, in maze units.
///
/// The maze core only stores and forwards borders; renderers decide how each
/// variant is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Border {
    /// Straight segment from `(x1, y1)` to `(x2, y2)`.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Counter-clockwise arc of radius `r` around `(cx, cy)` from angle
    /// `theta1` to `theta2`, in radians.
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        theta1: f64,
        theta2: f64,
    },
}

impl Border {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Border::Line { x1, y1, x2, y2 }
    }

    pub fn arc(cx: f64, cy: f64, r: f64, theta1: f64, theta2: f64) -> Self {
        Border::Arc {
            cx,
            cy,
            r,
            theta1,
            theta2,
        }
    }

    /// Point halfway along the border.
    pub fn midpoint(&self) -> (f64, f64) {
        match *self {
            Border::Line { x1, y1, x2, y2 } => ((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            Border::Arc {
                cx,
                cy,
                r,
                theta1,
                theta2,
            } => {
                let theta = (theta1 + theta2) / 2.0;
                (cx + r * theta.cos(), cy + r * theta.sin())
            }
        }
    }

    /// Both end points of the border, in drawing order.
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        match *self {
            Border::Line { x1, y1, x2, y2 } => ((x1, y1), (x2, y2)),
            Border::Arc {
                cx,
                cy,
                r,
                theta1,
                theta2,
            } => (
                (cx + r * theta1.cos(), cy + r * theta1.sin()),
                (cx + r * theta2.cos(), cy + r * theta2.sin()),
            ),
        }
    }

    /// Axis-aligned bounding box `(xmin, ymin, xmax, ymax)`.
    ///
    /// Arcs are bounded by their full circle, which is what the user graph
    /// format has always used to size its canvas.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match *self {
            Border::Line { x1, y1, x2, y2 } => (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
            Border::Arc { cx, cy, r, .. } => (cx - r, cy - r, cx + r, cy + r),
        }
    }

    /// Whether the arc sweeps more than half a turn.
    pub fn is_large_arc(&self) -> bool {
        match *self {
            Border::Line { .. } => false,
            Border::Arc { theta1, theta2, .. } => (theta2 - theta1).abs() > PI,
        }
    }
}
