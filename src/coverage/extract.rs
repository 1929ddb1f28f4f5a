use crate::error::{CoverageError, Result};
use crate::geometry::ring::check_ring_len;
use crate::geometry::Coordinate;

/// Copies the points of a closed ring from index `start` to index `end`.
///
/// If `end < start` the section runs past the closing point: after the last
/// index it continues at index 1, since index 0 duplicates the last point.
/// If `end == start` the whole ring is traversed, starting and ending at `start`.
///
/// The returned points are independent copies of the ring's coordinates.
///
/// # Errors
///
/// Returns `GeometryError::RingTooShort` for rings with fewer than four points
/// and `CoverageError::IndexOutOfRange` if `start` or `end` is not a valid index.
pub fn extract_edge_points(
    ring: &[Coordinate],
    start: usize,
    end: usize,
) -> Result<Vec<Coordinate>> {
    check_ring_len(ring)?;
    check_index(ring, start)?;
    check_index(ring, end)?;

    let size = if start < end {
        end - start + 1
    } else {
        ring.len() - start + end
    };
    let mut pts = Vec::with_capacity(size);
    let mut iring = start;
    for _ in 0..size {
        pts.push(ring[iring]);
        iring += 1;
        if iring >= ring.len() {
            iring = 1;
        }
    }
    Ok(pts)
}

/// Fails with `IndexOutOfRange` unless `index < pts.len()`.
pub(crate) fn check_index(pts: &[Coordinate], index: usize) -> Result<()> {
    if index >= pts.len() {
        return Err(CoverageError::IndexOutOfRange {
            index,
            len: pts.len(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, PolycoverError};
    use proptest::prelude::*;

    fn ring6() -> Vec<Coordinate> {
        [
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (0.0, 0.0),
        ]
        .into_iter()
        .map(Coordinate::from)
        .collect()
    }

    #[test]
    fn contiguous_section() {
        let ring = ring6();
        let pts = extract_edge_points(&ring, 1, 4).unwrap();
        assert_eq!(pts, ring[1..=4].to_vec());
    }

    #[test]
    fn wrapping_section_skips_closing_duplicate() {
        let ring = ring6();
        let pts = extract_edge_points(&ring, 4, 1).unwrap();
        assert_eq!(pts, vec![ring[4], ring[5], ring[1]]);
    }

    #[test]
    fn wrapping_section_ending_at_zero() {
        let ring = ring6();
        let pts = extract_edge_points(&ring, 3, 0).unwrap();
        assert_eq!(pts, vec![ring[3], ring[4], ring[5]]);
    }

    #[test]
    fn whole_ring() {
        let ring = ring6();
        let pts = extract_edge_points(&ring, 0, ring.len() - 1).unwrap();
        assert_eq!(pts, ring);
    }

    #[test]
    fn equal_indices_traverse_full_ring() {
        let ring = ring6();
        let pts = extract_edge_points(&ring, 2, 2).unwrap();
        assert_eq!(pts.len(), ring.len());
        assert_eq!(pts[0], ring[2]);
        assert_eq!(pts[pts.len() - 1], ring[2]);
    }

    #[test]
    fn keeps_z() {
        let mut ring = ring6();
        ring[2] = Coordinate::new_3d(4.0, 2.0, 7.5);
        let pts = extract_edge_points(&ring, 1, 3).unwrap();
        assert!(pts[1].equals_3d(&ring[2]));
    }

    #[test]
    fn index_out_of_range() {
        let ring = ring6();
        let err = extract_edge_points(&ring, 1, 6).unwrap_err();
        assert!(matches!(
            err,
            PolycoverError::Coverage(CoverageError::IndexOutOfRange { index: 6, len: 6 })
        ));
    }

    #[test]
    fn short_ring_rejected() {
        let ring = &ring6()[..3];
        let err = extract_edge_points(ring, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            PolycoverError::Geometry(GeometryError::RingTooShort { len: 3, .. })
        ));
    }

    fn closed_ring(max_len: usize) -> impl Strategy<Value = Vec<Coordinate>> {
        prop::collection::vec((-50i32..50, -50i32..50), 3..max_len).prop_map(|xy| {
            let mut ring: Vec<Coordinate> = xy
                .into_iter()
                .map(|(x, y)| Coordinate::new(f64::from(x), f64::from(y)))
                .collect();
            ring.push(ring[0]);
            ring
        })
    }

    proptest! {
        #[test]
        fn length_formula(ring in closed_ring(12), a in 0usize..64, b in 0usize..64) {
            let start = a % ring.len();
            let end = b % ring.len();
            prop_assume!(start != end);
            let pts = extract_edge_points(&ring, start, end).unwrap();
            let expected = if end > start { end - start + 1 } else { ring.len() - start + end };
            prop_assert_eq!(pts.len(), expected);
            prop_assert!(pts[0].equals_3d(&ring[start]));
            prop_assert!(pts[pts.len() - 1].equals_2d(&ring[end]));
        }

        #[test]
        fn extraction_does_not_alias(ring in closed_ring(12), a in 0usize..64, b in 0usize..64) {
            let start = a % ring.len();
            let end = b % ring.len();
            let original = ring.clone();
            let mut ring = ring;
            let mut pts = extract_edge_points(&ring, start, end).unwrap();
            let snapshot = pts.clone();

            pts[0].x += 1000.0;
            prop_assert_eq!(&ring, &original);

            ring[start].y -= 1000.0;
            prop_assert_eq!(&pts[1..], &snapshot[1..]);
            prop_assert!((pts[0].y - snapshot[0].y).abs() < f64::EPSILON);
        }
    }
}
