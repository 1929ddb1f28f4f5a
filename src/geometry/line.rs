use std::fmt;

use super::Coordinate;

/// How ordinate values of created geometries are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PrecisionModel {
    /// Full double precision.
    #[default]
    Floating,
    /// Single precision.
    FloatingSingle,
    /// Values snapped to a grid of `1 / scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// Rounds a value to this precision model.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn make_precise(&self, value: f64) -> f64 {
        match *self {
            Self::Floating => value,
            Self::FloatingSingle => f64::from(value as f32),
            Self::Fixed { scale } => (value * scale).round() / scale,
        }
    }

    /// Returns `true` for the floating models.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        !matches!(self, Self::Fixed { .. })
    }
}

/// Output configuration for created line geometries.
///
/// The factory only tags geometries with its SRID and precision model; it
/// never rewrites coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryFactory {
    /// Spatial reference identifier (0 = unspecified).
    pub srid: i32,
    pub precision_model: PrecisionModel,
}

impl GeometryFactory {
    #[must_use]
    pub fn new(srid: i32, precision_model: PrecisionModel) -> Self {
        Self {
            srid,
            precision_model,
        }
    }

    /// Creates a line string owning `coordinates`.
    #[must_use]
    pub fn create_line_string(&self, coordinates: Vec<Coordinate>) -> LineString {
        LineString {
            coordinates,
            srid: self.srid,
        }
    }

    /// Creates a multi-line string from `lines`, keeping their order.
    #[must_use]
    pub fn create_multi_line_string(&self, lines: Vec<LineString>) -> MultiLineString {
        MultiLineString {
            lines,
            srid: self.srid,
            precision_model: self.precision_model,
        }
    }
}

/// An ordered sequence of coordinates forming a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Coordinate>,
    srid: i32,
}

impl LineString {
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns `true` if the line has points and its first and last are 2D-equal.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }

    /// Total planar length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    #[must_use]
    pub fn srid(&self) -> i32 {
        self.srid
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LINESTRING ")?;
        write_coordinate_list(f, &self.coordinates)
    }
}

/// An ordered collection of line strings sharing one output configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    srid: i32,
    precision_model: PrecisionModel,
}

impl MultiLineString {
    #[must_use]
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    #[must_use]
    pub fn num_geometries(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn srid(&self) -> i32 {
        self.srid
    }

    #[must_use]
    pub fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }

    /// Sum of the lengths of all member lines.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.lines.iter().map(LineString::length).sum()
    }
}

impl fmt::Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MULTILINESTRING ")?;
        if self.lines.is_empty() {
            return f.write_str("EMPTY");
        }
        f.write_str("(")?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_coordinate_list(f, &line.coordinates)?;
        }
        f.write_str(")")
    }
}

/// Writes `(x y, x y, ...)`, or `EMPTY` for no coordinates.
pub(crate) fn write_coordinate_list(
    f: &mut fmt::Formatter<'_>,
    coords: &[Coordinate],
) -> fmt::Result {
    if coords.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_str("(")?;
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str(")")
}
