use super::Coordinate;
use crate::error::{GeometryError, Result};

/// Minimum number of points in a closed ring (a triangle plus its closing point).
pub const MIN_RING_LEN: usize = 4;

/// A closed sequence of coordinates bounding a polygon (shell or hole).
///
/// The first and last coordinates are equal in 2D.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    coords: Vec<Coordinate>,
}

impl Ring {
    /// Creates a ring from a closed coordinate sequence.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingTooShort` if fewer than [`MIN_RING_LEN`]
    /// coordinates are given, or `GeometryError::RingNotClosed` if the first and
    /// last coordinates differ.
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        check_ring_len(&coords)?;
        let closed = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        };
        if !closed {
            return Err(GeometryError::RingNotClosed.into());
        }
        Ok(Self { coords })
    }

    /// Builds a ring from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Ring::new`].
    pub fn from_xy(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Coordinate::from).collect())
    }

    /// The coordinates, including the closing point.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of coordinates, including the closing point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`: a valid ring has at least [`MIN_RING_LEN`] points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[must_use]
    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl AsRef<[Coordinate]> for Ring {
    fn as_ref(&self) -> &[Coordinate] {
        &self.coords
    }
}

/// Checks that a raw ring slice has at least [`MIN_RING_LEN`] coordinates.
pub(crate) fn check_ring_len(ring: &[Coordinate]) -> Result<()> {
    if ring.len() < MIN_RING_LEN {
        return Err(GeometryError::RingTooShort {
            len: ring.len(),
            min: MIN_RING_LEN,
        }
        .into());
    }
    Ok(())
}
