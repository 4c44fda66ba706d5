pub mod circle;
pub mod error;
pub mod geometry;
pub mod point;
pub mod polygon;
pub mod read_geometry;
pub mod reference;
pub mod svg;

pub use circle::{DEFAULT_POINT_COUNT, RadiusCircle, generate_circle};
pub use error::{Error, Result};
pub use geometry::{GeoJsonGeometry, extract_largest_outer_ring};
pub use point::{GeoPoint, Ring};
pub use polygon::compute_area;
