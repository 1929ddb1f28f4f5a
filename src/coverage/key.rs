use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::extract::check_index;
use crate::error::{CoverageError, Result};
use crate::geometry::ring::check_ring_len;
use crate::geometry::Coordinate;

/// Direction in which ring indices are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

/// Identity of a coverage edge, independent of the ring it was read from.
///
/// The key is the segment from an anchor vertex of the edge to its smaller
/// distinct neighbour. Keys compare by value on X and Y only.
#[derive(Debug, Clone, Copy)]
pub struct EdgeKey {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl EdgeKey {
    #[must_use]
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Self { p0, p1 }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.p0.equals_2d(&other.p0) && self.p1.equals_2d(&other.p1)
    }
}

// Keys never hold NaN ordinates, so 2D equality is reflexive here.
impl Eq for EdgeKey {}

impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in [&self.p0, &self.p1] {
            ordinate_bits(c.x).hash(state);
            ordinate_bits(c.y).hash(state);
        }
    }
}

/// Bit pattern with `-0.0` folded onto `0.0`, consistent with `==`.
fn ordinate_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Computes the key of a whole ring.
///
/// The anchor is the greatest vertex (by X, then Y) among indices
/// `0..len - 1`, first occurrence winning. The second point is the smaller of
/// the anchor's two distinct neighbours, which makes the key independent of
/// both the ring's start index and its winding.
///
/// # Errors
///
/// Returns `GeometryError::RingTooShort` for rings with fewer than four points
/// and `CoverageError::DegenerateEdge` if all points are coincident.
pub fn ring_key(ring: &[Coordinate]) -> Result<EdgeKey> {
    check_ring_len(ring)?;

    let mut index_low = 0;
    for (i, c) in ring.iter().enumerate().take(ring.len() - 1).skip(1) {
        if ring[index_low].compare_xy(c) == Ordering::Less {
            index_low = i;
        }
    }
    let key0 = ring[index_low];

    let adj0 = find_distinct_point(ring, index_low, ScanDirection::Forward, &key0)?;
    let adj1 = find_distinct_point(ring, index_low, ScanDirection::Backward, &key0)?;
    let key1 = if adj0.compare_xy(&adj1) == Ordering::Less {
        adj0
    } else {
        adj1
    };
    tracing::trace!(index_low, %key0, %key1, "ring key");
    Ok(EdgeKey::new(key0, key1))
}

/// Computes the key of the ring section running from `start` to `end`.
///
/// The section's end points are node points shared with the neighbouring
/// ring, so the smaller one anchors the key and the scan runs from it into
/// the section.
///
/// # Errors
///
/// Returns `GeometryError::RingTooShort`, `CoverageError::IndexOutOfRange`
/// for invalid indices, or `CoverageError::DegenerateEdge` if no distinct
/// point is found.
pub fn section_key(ring: &[Coordinate], start: usize, end: usize) -> Result<EdgeKey> {
    check_ring_len(ring)?;
    anchored_key(ring, start, end)
}

/// Section key without the closed-ring length check.
pub(crate) fn anchored_key(pts: &[Coordinate], start: usize, end: usize) -> Result<EdgeKey> {
    check_index(pts, start)?;
    check_index(pts, end)?;

    let end0 = pts[start];
    let end1 = pts[end];
    let key = if end0.compare_xy(&end1) == Ordering::Less {
        let key1 = find_distinct_point(pts, start, ScanDirection::Forward, &end0)?;
        EdgeKey::new(end0, key1)
    } else {
        let key1 = find_distinct_point(pts, end, ScanDirection::Backward, &end1)?;
        EdgeKey::new(end1, key1)
    };
    Ok(key)
}

/// Finds the first point not 2D-equal to `pt`, scanning from `index`
/// (inclusive) in `direction` and wrapping around the slice.
///
/// # Errors
///
/// Returns `CoverageError::IndexOutOfRange` if `index` is invalid, or
/// `CoverageError::DegenerateEdge` if the scan returns to `index` without
/// finding a distinct point.
pub fn find_distinct_point(
    pts: &[Coordinate],
    index: usize,
    direction: ScanDirection,
    pt: &Coordinate,
) -> Result<Coordinate> {
    check_index(pts, index)?;
    let len = pts.len();
    let mut i = index;
    loop {
        if !pts[i].equals_2d(pt) {
            return Ok(pts[i]);
        }
        i = match direction {
            ScanDirection::Forward if i + 1 >= len => 0,
            ScanDirection::Forward => i + 1,
            ScanDirection::Backward if i == 0 => len - 1,
            ScanDirection::Backward => i - 1,
        };
        if i == index {
            break;
        }
    }
    tracing::debug!(index, len, %pt, "no distinct point on edge");
    Err(CoverageError::DegenerateEdge { index, len }.into())
}
