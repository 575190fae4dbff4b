//! Contains [`Point`], a 2D coordinate pair, and everything to write it out
//! and read it back in.
//!
//! # Textual form
//! A point is written as its two coordinates separated by a [`Delimiter`],
//! for example `3 4` or `3, 4`. Reading accepts whitespace and/or a single
//! comma between the coordinates, so every [`Format`] can be read back.

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

mod error;
mod format;
mod input;

pub use error::ParseError;
pub use format::{Delimiter, Format, Formatted};

/// A location in the 2D plane.
///
/// [`Point::default`] is the origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Adds `right` to this point and returns `self` to allow chaining.
    ///
    /// ## Example
    /// ```
    /// use pointkit::Point;
    ///
    /// let mut p = Point::new(1.0, 2.0);
    /// p.add_in_place(Point::new(3.0, 4.0)).subtract_in_place(Point::new(1.0, 1.0));
    /// assert_eq!(p, Point::new(3.0, 5.0));
    /// ```
    pub fn add_in_place(&mut self, right: Point) -> &mut Self {
        *self += right;
        self
    }

    /// Subtracts `right` from this point and returns `self` to allow chaining.
    pub fn subtract_in_place(&mut self, right: Point) -> &mut Self {
        *self -= right;
        self
    }

    /// Returns `true` if both coordinates differ by at most `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, right: Point) -> Point {
        Point::new(self.x + right.x, self.y + right.y)
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, right: &Point) -> Point {
        *self + *right
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, right: Point) -> Point {
        Point::new(self.x - right.x, self.y - right.y)
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, right: &Point) -> Point {
        *self - *right
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, right: Point) {
        self.x += right.x;
        self.y += right.y;
    }
}

impl AddAssign<&Point> for Point {
    fn add_assign(&mut self, right: &Point) {
        *self += *right;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, right: Point) {
        self.x -= right.x;
        self.y -= right.y;
    }
}

impl SubAssign<&Point> for Point {
    fn sub_assign(&mut self, right: &Point) {
        *self -= *right;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Point {
        iter.fold(Point::ORIGIN, Add::add)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Point {
        iter.copied().sum()
    }
}
