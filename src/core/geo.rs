use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatHemisphere {
    North,
    South,
}

impl LatHemisphere {
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

/// Longitude side of the chart.
///
/// On these charts east lies to the left of the center calibration pixel and
/// west to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LonHemisphere {
    East,
    West,
}

impl LonHemisphere {
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// Whole-degree readout of a pixel on the chart.
///
/// Degrees are not clamped: a pixel outside the calibration box yields values
/// below 0 or above 180.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoReading {
    pub latitude: i32,
    pub lat_hemisphere: LatHemisphere,
    pub longitude: i32,
    pub lon_hemisphere: LonHemisphere,
}

impl GeoReading {
    /// Converts the readout into a fix with zero minutes.
    #[must_use]
    pub fn to_fix(self) -> GeoFix {
        GeoFix {
            latitude: DegreesMinutes::new(self.latitude, 0),
            lat_hemisphere: self.lat_hemisphere,
            longitude: DegreesMinutes::new(self.longitude, 0),
            lon_hemisphere: self.lon_hemisphere,
        }
    }
}

impl fmt::Display for GeoReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {} {}° {}",
            self.latitude,
            self.lat_hemisphere.letter(),
            self.longitude,
            self.lon_hemisphere.letter()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreesMinutes {
    pub degrees: i32,
    pub minutes: i32,
}

impl DegreesMinutes {
    #[must_use]
    pub const fn new(degrees: i32, minutes: i32) -> Self {
        Self { degrees, minutes }
    }

    /// Splits an unsigned angle into whole degrees and whole minutes, truncating both.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let angle = angle.abs();
        Self {
            degrees: angle.trunc() as i32,
            minutes: ((angle % 1.0) * 60.0).trunc() as i32,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        (0..=180).contains(&self.degrees) && (0..60).contains(&self.minutes)
    }

    #[must_use]
    pub fn to_angle(self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0
    }
}

/// Degree/minute position on the chart, e.g. a sextant fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: DegreesMinutes,
    pub lat_hemisphere: LatHemisphere,
    pub longitude: DegreesMinutes,
    pub lon_hemisphere: LonHemisphere,
}

impl GeoFix {
    #[must_use]
    pub const fn new(
        latitude: DegreesMinutes,
        lat_hemisphere: LatHemisphere,
        longitude: DegreesMinutes,
        lon_hemisphere: LonHemisphere,
    ) -> Self {
        Self {
            latitude,
            lat_hemisphere,
            longitude,
            lon_hemisphere,
        }
    }
}

impl fmt::Display for GeoFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}'{}, {}° {}'{}",
            self.latitude.degrees,
            self.latitude.minutes,
            self.lat_hemisphere.letter(),
            self.longitude.degrees,
            self.longitude.minutes,
            self.lon_hemisphere.letter()
        )
    }
}

/// Result of a conversion that may land outside the charted world.
///
/// `OutOfRange` is an expected outcome, not an error: no pixel and no marker
/// are produced for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Projection<T> {
    OnChart(T),
    OutOfRange,
}

impl<T> Projection<T> {
    pub fn on_chart(self) -> Option<T> {
        match self {
            Self::OnChart(value) => Some(value),
            Self::OutOfRange => None,
        }
    }

    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange)
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Projection<U>) -> Projection<U> {
        match self {
            Self::OnChart(value) => f(value),
            Self::OutOfRange => Projection::OutOfRange,
        }
    }
}
