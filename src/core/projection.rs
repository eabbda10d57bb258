use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::geo::{
    DegreesMinutes, GeoFix, GeoReading, LatHemisphere, LonHemisphere, Projection,
};
use crate::core::types::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// Calibration constants tying a chart image to the game world.
///
/// `x_width`, `y_height`, `x_zero` and `y_zero` are in world units; the
/// start/center/end triples are pixels on the displayed chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCalibration {
    pub x_width: i32,
    pub y_height: i32,
    pub x_zero: i32,
    pub y_zero: i32,
    pub x_start: i32,
    pub x_center: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_center: i32,
    pub y_end: i32,
}

impl ChartCalibration {
    fn validate(self) -> ChartResult<Self> {
        if self.x_width <= 0 || self.y_height <= 0 {
            return Err(ChartError::InvalidCalibration(format!(
                "world extent must be > 0, got {}x{}",
                self.x_width, self.y_height
            )));
        }
        for (start, center, end, axis) in [
            (self.x_start, self.x_center, self.x_end, "x"),
            (self.y_start, self.y_center, self.y_end, "y"),
        ] {
            if !(start < center && center < end) {
                return Err(ChartError::InvalidCalibration(format!(
                    "{axis} calibration must satisfy start < center < end, got {start}/{center}/{end}"
                )));
            }
        }
        Ok(self)
    }
}

/// Named chart definition: calibration plus the world ids it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartProfile {
    pub name: String,
    pub calibration: ChartCalibration,
    pub facets: Vec<i32>,
}

impl ChartProfile {
    /// The Britannia sea chart, valid for Felucca (0) and Trammel (1).
    #[must_use]
    pub fn britannia() -> Self {
        Self {
            name: "Britannia".to_owned(),
            calibration: ChartCalibration {
                // Lost Lands and the dungeon areas lie beyond these extents.
                x_width: 5120,
                y_height: 4096,
                x_zero: 1323,
                y_zero: 1624,
                x_start: 3,
                x_center: 325,
                x_end: 642,
                y_start: 4,
                y_center: 261,
                y_end: 513,
            },
            facets: vec![0, 1],
        }
    }
}

impl Default for ChartProfile {
    fn default() -> Self {
        Self::britannia()
    }
}

/// Forward and inverse math between chart pixels and degrees for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjection {
    name: String,
    calibration: ChartCalibration,
    valid_facets: SmallVec<[i32; 4]>,
}

impl ChartProjection {
    pub fn new(profile: &ChartProfile) -> ChartResult<Self> {
        let calibration = profile.calibration.validate()?;
        if profile.name.trim().is_empty() {
            return Err(ChartError::InvalidCalibration(
                "chart name must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            name: profile.name.clone(),
            calibration,
            valid_facets: profile.facets.iter().copied().collect(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn calibration(&self) -> ChartCalibration {
        self.calibration
    }

    #[must_use]
    pub fn valid_facets(&self) -> &[i32] {
        &self.valid_facets
    }

    #[must_use]
    pub fn is_valid_facet(&self, facet: i32) -> bool {
        self.valid_facets.contains(&facet)
    }

    /// Reads the whole-degree position of a chart pixel.
    ///
    /// Pixels on the center row/column belong to the south/east half.
    #[must_use]
    pub fn pixel_to_geo(&self, point: PixelPoint) -> GeoReading {
        let c = self.calibration;
        let (latitude, lat_hemisphere) = if point.y <= c.y_center {
            (
                scaled_degrees(point.y - c.y_start, c.y_center - c.y_start),
                LatHemisphere::South,
            )
        } else {
            (
                scaled_degrees(c.y_end - point.y + 1, c.y_end - c.y_center),
                LatHemisphere::North,
            )
        };
        let (longitude, lon_hemisphere) = if point.x <= c.x_center {
            (
                scaled_degrees(point.x - c.x_start, c.x_center - c.x_start),
                LonHemisphere::East,
            )
        } else {
            (
                scaled_degrees(c.x_end - point.x, c.x_end - c.x_center),
                LonHemisphere::West,
            )
        };

        GeoReading {
            latitude,
            lat_hemisphere,
            longitude,
            lon_hemisphere,
        }
    }

    /// Returns signed `(longitude, latitude)` angles of a world position.
    ///
    /// Positive longitude is east, positive latitude is south. Angles past
    /// 180 are folded back as `-180 + angle % 180`.
    pub fn world_to_angles(&self, x: i32, y: i32) -> Projection<(f64, f64)> {
        let c = self.calibration;
        if x < 0 || y < 0 || x >= c.x_width || y >= c.y_height {
            return Projection::OutOfRange;
        }
        Projection::OnChart((
            fold_half_turn(world_angle(x, c.x_zero, c.x_width)),
            fold_half_turn(world_angle(y, c.y_zero, c.y_height)),
        ))
    }

    /// Converts a world position into a degree/minute fix.
    pub fn world_to_geo(&self, x: i32, y: i32) -> Projection<GeoFix> {
        self.world_to_angles(x, y).and_then(|(longitude, latitude)| {
            Projection::OnChart(GeoFix {
                latitude: DegreesMinutes::from_angle(latitude),
                lat_hemisphere: if latitude >= 0.0 {
                    LatHemisphere::South
                } else {
                    LatHemisphere::North
                },
                longitude: DegreesMinutes::from_angle(longitude),
                lon_hemisphere: if longitude >= 0.0 {
                    LonHemisphere::East
                } else {
                    LonHemisphere::West
                },
            })
        })
    }

    /// Places a degree/minute fix on the chart image.
    ///
    /// Minutes only take part in the world range check; the pixel is derived
    /// from whole degrees with truncating integer math.
    pub fn geo_to_pixel(&self, fix: GeoFix) -> Projection<PixelPoint> {
        if !fix.latitude.is_valid() || !fix.longitude.is_valid() {
            return Projection::OutOfRange;
        }

        let c = self.calibration;
        let longitude = match fix.lon_hemisphere {
            LonHemisphere::East => fix.longitude.to_angle(),
            LonHemisphere::West => -fix.longitude.to_angle(),
        };
        let latitude = match fix.lat_hemisphere {
            LatHemisphere::South => fix.latitude.to_angle(),
            LatHemisphere::North => -fix.latitude.to_angle(),
        };
        if !angle_within_extent(longitude, c.x_zero, c.x_width)
            || !angle_within_extent(latitude, c.y_zero, c.y_height)
        {
            return Projection::OutOfRange;
        }

        let lon = fix.longitude.degrees;
        let lat = fix.latitude.degrees;
        let x = match fix.lon_hemisphere {
            LonHemisphere::East => c.x_start + (c.x_center - c.x_start) * lon / 180,
            LonHemisphere::West => c.x_end - lon * (c.x_end - c.x_center) / 180,
        };
        let y = match fix.lat_hemisphere {
            LatHemisphere::South => c.y_start + (c.y_center - c.y_start) * lat / 180,
            LatHemisphere::North => c.y_end + 1 - lat * (c.y_end - c.y_center) / 180,
        };
        Projection::OnChart(PixelPoint::new(x, y))
    }

    /// Places a raw world position on the chart image.
    pub fn world_to_pixel(&self, x: i32, y: i32) -> Projection<PixelPoint> {
        self.world_to_geo(x, y).and_then(|fix| self.geo_to_pixel(fix))
    }
}

fn scaled_degrees(offset: i32, span: i32) -> i32 {
    ((f64::from(offset) / f64::from(span)) * 180.0).round_ties_even() as i32
}

fn world_angle(value: i32, zero: i32, extent: i32) -> f64 {
    ((i64::from(value) - i64::from(zero)) * 360) as f64 / f64::from(extent)
}

fn fold_half_turn(angle: f64) -> f64 {
    if angle > 180.0 {
        -180.0 + angle % 180.0
    } else {
        angle
    }
}

/// Checks whether a signed angle, or its unfolded `+360` twin, maps back into `[0, extent)`.
fn angle_within_extent(angle: f64, zero: i32, extent: i32) -> bool {
    let extent = f64::from(extent);
    [angle, angle + 360.0].into_iter().any(|candidate| {
        let world = f64::from(zero) + candidate * extent / 360.0;
        (0.0..extent).contains(&world)
    })
}
