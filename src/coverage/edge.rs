use std::fmt;

use super::extract::extract_edge_points;
use super::key::{anchored_key, ring_key, EdgeKey};
use crate::error::Result;
use crate::geometry::line::write_coordinate_list;
use crate::geometry::ring::check_ring_len;
use crate::geometry::{Coordinate, GeometryFactory, LineString};

/// An edge of a polygonal coverage, formed from all or a section of a ring.
///
/// Edges shared by adjacent polygons are created once and counted once per
/// additional ring that contains them. An edge may be a *free ring*: a whole
/// ring with no node points, i.e. one touching no other ring in the coverage.
///
/// The ring count is plain mutable state; an edge set is built by one thread
/// per coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageEdge {
    points: Vec<Coordinate>,
    ring_count: usize,
    is_free_ring: bool,
}

impl CoverageEdge {
    /// Creates an edge owning `points`.
    #[must_use]
    pub fn new(points: Vec<Coordinate>, is_free_ring: bool) -> Self {
        Self {
            points,
            ring_count: 0,
            is_free_ring,
        }
    }

    /// Creates a free-ring edge holding a copy of the whole ring.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingTooShort` if the ring has fewer than four points.
    pub fn from_ring(ring: &[Coordinate]) -> Result<Self> {
        check_ring_len(ring)?;
        let points = extract_edge_points(ring, 0, ring.len() - 1)?;
        tracing::trace!(points = points.len(), "free ring edge");
        Ok(Self::new(points, true))
    }

    /// Creates an edge from the ring section running from `start` to `end`,
    /// wrapping past the closing point when `end < start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring is too short or an index is out of range.
    pub fn from_section(ring: &[Coordinate], start: usize, end: usize) -> Result<Self> {
        let points = extract_edge_points(ring, start, end)?;
        tracing::trace!(start, end, points = points.len(), "section edge");
        Ok(Self::new(points, false))
    }

    /// Records one more ring containing this edge.
    pub fn increment_ring_count(&mut self) {
        self.ring_count += 1;
    }

    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Returns `true` if this edge is a whole ring with no constrained nodes.
    #[must_use]
    pub fn is_free_ring(&self) -> bool {
        self.is_free_ring
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.points
    }

    /// Replaces the edge geometry, e.g. with a simplified version.
    pub fn set_coordinates(&mut self, points: Vec<Coordinate>) {
        self.points = points;
    }

    #[must_use]
    pub fn start_coordinate(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    #[must_use]
    pub fn end_coordinate(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    /// Recomputes the key from the edge's current points.
    ///
    /// For an unmodified edge this equals the key of the ring or section it
    /// was created from.
    ///
    /// # Errors
    ///
    /// Returns `CoverageError::DegenerateEdge` if the points are all coincident,
    /// or an index/length error if the edge has too few points.
    pub fn key(&self) -> Result<EdgeKey> {
        if self.is_free_ring {
            ring_key(&self.points)
        } else {
            anchored_key(&self.points, 0, self.points.len().saturating_sub(1))
        }
    }

    /// Converts the edge to a line string tagged with the factory's configuration.
    #[must_use]
    pub fn to_line_string(&self, factory: &GeometryFactory) -> LineString {
        factory.create_line_string(self.points.clone())
    }
}

impl fmt::Display for CoverageEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LINESTRING ")?;
        write_coordinate_list(f, &self.points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::coverage::key::section_key;
    use crate::error::{CoverageError, PolycoverError};
    use crate::geometry::Ring;

    fn square() -> Ring {
        Ring::from_xy(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ])
        .unwrap()
    }

    fn ring6() -> Ring {
        Ring::from_xy(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn free_ring_edge() {
        let ring = square();
        let edge = CoverageEdge::from_ring(ring.coords()).unwrap();
        assert_eq!(edge.coordinates(), ring.coords());
        assert!(edge.is_free_ring());
        assert_eq!(edge.ring_count(), 0);
        assert_eq!(edge.start_coordinate(), edge.end_coordinate());
    }

    #[test]
    fn section_edge() {
        let ring = ring6();
        let edge = CoverageEdge::from_section(ring.coords(), 1, 4).unwrap();
        assert_eq!(edge.coordinates(), &ring.coords()[1..=4]);
        assert!(!edge.is_free_ring());
        assert_eq!(edge.start_coordinate(), Some(&Coordinate::new(5.0, 0.0)));
        assert_eq!(edge.end_coordinate(), Some(&Coordinate::new(0.0, 10.0)));
    }

    #[test]
    fn wrapping_section_edge() {
        let ring = ring6();
        let c = ring.coords();
        let edge = CoverageEdge::from_section(c, 4, 1).unwrap();
        assert_eq!(edge.coordinates(), &[c[4], c[5], c[1]]);
    }

    #[test]
    fn ring_count_increments() {
        let mut edge = CoverageEdge::from_section(ring6().coords(), 1, 3).unwrap();
        edge.increment_ring_count();
        edge.increment_ring_count();
        assert_eq!(edge.ring_count(), 2);
    }

    #[test]
    fn replaced_coordinates_are_owned() {
        let mut edge = CoverageEdge::from_section(ring6().coords(), 1, 4).unwrap();
        edge.set_coordinates(vec![Coordinate::new(5.0, 0.0), Coordinate::new(0.0, 10.0)]);
        assert_eq!(edge.coordinates().len(), 2);
        assert!(!edge.is_free_ring());
    }

    #[test]
    fn key_matches_source() {
        let ring = ring6();
        let edge = CoverageEdge::from_section(ring.coords(), 4, 2).unwrap();
        assert_eq!(edge.key().unwrap(), section_key(ring.coords(), 4, 2).unwrap());

        let free = CoverageEdge::from_ring(ring.coords()).unwrap();
        assert_eq!(free.key().unwrap(), ring_key(ring.coords()).unwrap());
    }

    #[test]
    fn key_of_collapsed_edge() {
        let p = Coordinate::new(3.0, 3.0);
        let edge = CoverageEdge::new(vec![p, p], false);
        assert!(matches!(
            edge.key().unwrap_err(),
            PolycoverError::Coverage(CoverageError::DegenerateEdge { .. })
        ));
    }

    #[test]
    fn empty_edge_key_is_an_error() {
        let edge = CoverageEdge::new(Vec::new(), false);
        assert!(edge.key().is_err());
        assert!(edge.start_coordinate().is_none());
    }

    #[test]
    fn display_as_wkt() {
        let edge = CoverageEdge::from_section(ring6().coords(), 1, 3).unwrap();
        assert_eq!(edge.to_string(), "LINESTRING (5 0, 10 0, 10 10)");
    }

    #[test]
    fn to_line_string_uses_factory() {
        let factory = GeometryFactory::new(3857, crate::geometry::PrecisionModel::Floating);
        let edge = CoverageEdge::from_ring(square().coords()).unwrap();
        let line = edge.to_line_string(&factory);
        assert_eq!(line.srid(), 3857);
        assert!(line.is_closed());
        assert_eq!(line.coordinates(), edge.coordinates());
    }
}
