use std::cmp::Ordering;
use std::fmt;

use crate::math::{Point2, Point3};

/// An immutable planar coordinate with an optional Z ordinate.
///
/// A missing Z is stored as `NaN`. Equality (`==`) and ordering only consider
/// X and Y; use [`Coordinate::equals_3d`] when Z matters.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// Creates a 2D coordinate (Z absent).
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: f64::NAN }
    }

    /// Creates a coordinate with a Z ordinate.
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if the coordinate carries a Z ordinate.
    #[must_use]
    pub fn has_z(&self) -> bool {
        !self.z.is_nan()
    }

    /// Compares by X, then by Y. Z is ignored.
    ///
    /// This is the order every canonical key is built on; it must not change.
    #[must_use]
    pub fn compare_xy(&self, other: &Self) -> Ordering {
        if self.x < other.x {
            return Ordering::Less;
        }
        if self.x > other.x {
            return Ordering::Greater;
        }
        if self.y < other.y {
            return Ordering::Less;
        }
        if self.y > other.y {
            return Ordering::Greater;
        }
        Ordering::Equal
    }

    /// Tests X and Y for equality, ignoring Z.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals_2d(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Tests all three ordinates. Two absent Z values are equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals_3d(&self, other: &Self) -> bool {
        self.equals_2d(other) && (self.z == other.z || (self.z.is_nan() && other.z.is_nan()))
    }

    /// Planar Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.to_point2(), &other.to_point2())
    }

    /// Converts to a 2D point, dropping Z.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Converts to a 3D point. A missing Z becomes `0.0`.
    #[must_use]
    pub fn to_point3(&self) -> Point3 {
        let z = if self.has_z() { self.z } else { 0.0 };
        Point3::new(self.x, self.y, z)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.equals_2d(other)
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_xy(other))
    }
}

impl From<Point2> for Coordinate {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point3> for Coordinate {
    fn from(p: Point3) -> Self {
        Self::new_3d(p.x, p.y, p.z)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_z() {
            write!(f, "{} {} {}", self.x, self.y, self.z)
        } else {
            write!(f, "{} {}", self.x, self.y)
        }
    }
}
