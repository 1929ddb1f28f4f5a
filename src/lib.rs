pub mod coverage;
pub mod error;
pub mod geometry;
pub mod math;

pub use coverage::{assemble_lines, CoverageEdge, EdgeKey};
pub use error::{PolycoverError, Result};
pub use geometry::{Coordinate, GeometryFactory, MultiLineString, Ring};
