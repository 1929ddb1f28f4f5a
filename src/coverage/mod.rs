//! Boundary edges of polygonal coverages.
//!
//! A coverage builder walks every ring, computes an [`EdgeKey`] for the whole
//! ring or for each section between node points, and creates a
//! [`CoverageEdge`] the first time a key is seen. Later rings with the same
//! key only increment the edge's ring count. The key depends on geometry
//! alone, so adjacent rings storing a shared boundary from different start
//! points or in opposite directions resolve to the same edge.

mod assemble;
mod edge;
mod extract;
mod key;

pub use assemble::assemble_lines;
pub use edge::CoverageEdge;
pub use extract::extract_edge_points;
pub use key::{find_distinct_point, ring_key, section_key, EdgeKey, ScanDirection};
