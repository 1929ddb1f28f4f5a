pub mod coordinate;
pub mod line;
pub mod ring;

pub use coordinate::Coordinate;
pub use line::{GeometryFactory, LineString, MultiLineString, PrecisionModel};
pub use ring::{Ring, MIN_RING_LEN};
