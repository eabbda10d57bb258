pub mod geo;
pub mod projection;
pub mod types;

pub use geo::{DegreesMinutes, GeoFix, GeoReading, LatHemisphere, LonHemisphere, Projection};
pub use projection::{ChartCalibration, ChartProfile, ChartProjection};
pub use types::{PixelPoint, WorldPosition};
