//! Vector path model and its SVG path-data serialization.
//!
//! Generators build a [`Path`] command by command; the text form is only
//! produced at the edge by [`Display`](std::fmt::Display), so tests can
//! inspect geometry directly instead of re-parsing strings.

use crate::format::num;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle` (radians).
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", num(self.x), num(self.y))
    }
}

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    /// Cubic Bézier: first control, second control, end.
    CubicTo(Point, Point, Point),
    /// Smooth cubic: the first control point is the reflection of the
    /// previous segment's second control point. Holds second control, end.
    SmoothTo(Point, Point),
    LineTo(Point),
    Close,
}

/// Discriminant of a [`PathCommand`], used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    CubicTo,
    SmoothTo,
    LineTo,
    Close,
}

impl PathCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            PathCommand::MoveTo(_) => CommandKind::MoveTo,
            PathCommand::CubicTo(..) => CommandKind::CubicTo,
            PathCommand::SmoothTo(..) => CommandKind::SmoothTo,
            PathCommand::LineTo(_) => CommandKind::LineTo,
            PathCommand::Close => CommandKind::Close,
        }
    }

    /// The on-curve point this command ends at, if any.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo(_, _, p) | PathCommand::SmoothTo(_, p) => Some(p),
            PathCommand::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{p}"),
            PathCommand::CubicTo(c1, c2, p) => write!(f, "C{c1} {c2} {p}"),
            PathCommand::SmoothTo(c2, p) => write!(f, "S{c2} {p}"),
            PathCommand::LineTo(p) => write!(f, "L{p}"),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// An ordered sequence of drawing commands.
///
/// Displays as SVG path data with commands separated by single spaces,
/// e.g. `M0,100 C-50,60 50,80 0,60 L800,100 Z`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
        self
    }

    pub fn smooth_to(&mut self, c2: Point, p: Point) -> &mut Self {
        self.commands.push(PathCommand::SmoothTo(c2, p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands of the given kind.
    pub fn count(&self, kind: CommandKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }

    /// On-curve points in drawing order (control points excluded).
    pub fn points(&self) -> Vec<Point> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    /// True when the final command is [`PathCommand::Close`].
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}
