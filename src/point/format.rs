use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use serde::{Deserialize, Serialize};

use super::Point;

/// The separator between the two coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// `3 4`
    #[default]
    Space,
    /// `3, 4`
    Comma,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Comma => ", ",
        }
    }
}

/// Describes how a point is written.
///
/// The default format writes each coordinate with the shortest
/// representation which parses back into the very same `f64`, so
/// [`Point::print`] followed by [`Point::input`] is lossless. A fixed
/// `precision` rounds the coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    pub delimiter: Delimiter,
    /// Number of digits after the decimal point.
    ///
    /// `u16` is the widest precision the formatting machinery accepts.
    pub precision: Option<u16>,
}

/// A point paired with its [`Format`], created by [`Point::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    point: &'a Point,
    format: &'a Format,
}

impl Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point { x, y } = *self.point;
        let delimiter = self.format.delimiter.as_str();

        match self.format.precision {
            Some(precision) => {
                let precision = usize::from(precision);
                write!(f, "{x:.precision$}{delimiter}{y:.precision$}")
            }
            None => write!(f, "{x}{delimiter}{y}"),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display_with(&Format::default()), f)
    }
}

impl Point {
    pub fn display_with<'a>(&'a self, format: &'a Format) -> Formatted<'a> {
        Formatted {
            point: self,
            format,
        }
    }

    /// Writes the point in the default [`Format`] into `out`.
    ///
    /// Write errors are handed back to the caller, nothing is written after
    /// the second coordinate (no newline).
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.print_with(out, &Format::default())
    }

    pub fn print_with<W: Write + ?Sized>(&self, out: &mut W, format: &Format) -> io::Result<()> {
        write!(out, "{}", self.display_with(format))
    }

    /// Same as [`Point::print`] with the standard output as the sink.
    pub fn print_stdout(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.print(&mut stdout)?;
        stdout.flush()
    }
}
