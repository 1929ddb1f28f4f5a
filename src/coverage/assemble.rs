use super::CoverageEdge;
use crate::geometry::{GeometryFactory, MultiLineString};

/// Builds one multi-line string from the edges, one line per edge in order.
#[must_use]
pub fn assemble_lines(edges: &[CoverageEdge], factory: &GeometryFactory) -> MultiLineString {
    let lines = edges
        .iter()
        .map(|edge| edge.to_line_string(factory))
        .collect();
    factory.create_multi_line_string(lines)
}
