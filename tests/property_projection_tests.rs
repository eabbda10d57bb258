use proptest::prelude::*;
use sea_chart::core::{ChartProfile, ChartProjection, LatHemisphere, LonHemisphere, PixelPoint};

/// Largest per-axis drift after `geo_to_pixel(pixel_to_geo(p))` on the Britannia chart.
///
/// Whole-degree rounding moves at most half a degree (under 0.9 px on every
/// Britannia axis) and the integer inverse truncates once more, so the
/// result always lands on `p` or a direct neighbour.
const ROUND_TRIP_TOLERANCE_PX: u32 = 1;

fn britannia() -> ChartProjection {
    ChartProjection::new(&ChartProfile::britannia()).expect("valid chart")
}

proptest! {
    #[test]
    fn pixel_round_trip_stays_within_one_pixel(x in 3i32..=642, y in 4i32..=513) {
        let projection = britannia();
        let point = PixelPoint::new(x, y);

        let reading = projection.pixel_to_geo(point);
        let back = projection
            .geo_to_pixel(reading.to_fix())
            .on_chart()
            .expect("calibration box stays on chart");

        prop_assert!(point.x.abs_diff(back.x) <= ROUND_TRIP_TOLERANCE_PX);
        prop_assert!(point.y.abs_diff(back.y) <= ROUND_TRIP_TOLERANCE_PX);
    }

    #[test]
    fn hemisphere_follows_center_comparison(x in 3i32..=642, y in 4i32..=513) {
        let projection = britannia();
        let reading = projection.pixel_to_geo(PixelPoint::new(x, y));

        let expected_lat = if y <= 261 { LatHemisphere::South } else { LatHemisphere::North };
        let expected_lon = if x <= 325 { LonHemisphere::East } else { LonHemisphere::West };
        prop_assert_eq!(reading.lat_hemisphere, expected_lat);
        prop_assert_eq!(reading.lon_hemisphere, expected_lon);
        prop_assert!((0..=180).contains(&reading.latitude));
        prop_assert!((0..=180).contains(&reading.longitude));
    }

    #[test]
    fn every_world_position_lands_inside_calibration_box(x in 0i32..5120, y in 0i32..4096) {
        let projection = britannia();
        let pixel = projection
            .world_to_pixel(x, y)
            .on_chart()
            .expect("in-range world position");

        prop_assert!((3..=642).contains(&pixel.x));
        // A fraction of a degree north reads as 0° N, one row past y_end.
        prop_assert!((4..=514).contains(&pixel.y));
    }

    #[test]
    fn world_positions_past_extent_never_project(
        x in 5120i32..20_000,
        y in -20_000i32..0
    ) {
        let projection = britannia();
        prop_assert!(projection.world_to_pixel(x, 10).is_out_of_range());
        prop_assert!(projection.world_to_pixel(10, y).is_out_of_range());
    }
}
