use sea_chart::core::PixelPoint;
use sea_chart::extensions::{MarkerOverlay, MarkerSet, MarkerStyle};

#[test]
fn add_marker_creates_distinct_instances_on_same_pixel() {
    let mut overlay = MarkerOverlay::new();
    let a = overlay.add_marker(PixelPoint::new(10, 10), MarkerStyle::Primary);
    let b = overlay.add_marker(PixelPoint::new(10, 10), MarkerStyle::Primary);

    assert_ne!(a, b);
    assert_eq!(overlay.len(), 2);
}

#[test]
fn move_marker_changes_only_that_marker() {
    let mut overlay = MarkerOverlay::new();
    let a = overlay.add_marker(PixelPoint::new(10, 10), MarkerStyle::Primary);
    let b = overlay.add_marker(PixelPoint::new(20, 20), MarkerStyle::Secondary);
    let c = overlay.add_marker(PixelPoint::new(30, 30), MarkerStyle::Primary);

    let previous = overlay.move_marker(b, PixelPoint::new(200, 150));

    assert_eq!(previous, Some(PixelPoint::new(20, 20)));
    assert_eq!(
        overlay.marker(a).map(|m| m.position),
        Some(PixelPoint::new(10, 10))
    );
    assert_eq!(
        overlay.marker(b).map(|m| (m.position, m.style)),
        Some((PixelPoint::new(200, 150), MarkerStyle::Secondary))
    );
    assert_eq!(
        overlay.marker(c).map(|m| m.position),
        Some(PixelPoint::new(30, 30))
    );
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut overlay = MarkerOverlay::new();
    let id = overlay.add_marker(PixelPoint::new(1, 1), MarkerStyle::Primary);
    overlay.remove_marker(id).expect("first removal");

    assert_eq!(overlay.move_marker(id, PixelPoint::new(5, 5)), None);
    assert!(!overlay.set_style(id, MarkerStyle::Secondary));
    assert_eq!(overlay.toggle_style(id), None);
    assert!(overlay.remove_marker(id).is_none());
    assert!(overlay.is_empty());
}

#[test]
fn toggle_style_swaps_between_two_styles() {
    let mut overlay = MarkerOverlay::new();
    let id = overlay.add_marker(PixelPoint::new(1, 1), MarkerStyle::default());

    assert_eq!(overlay.toggle_style(id), Some(MarkerStyle::Secondary));
    assert_eq!(overlay.toggle_style(id), Some(MarkerStyle::Primary));
    assert!(overlay.set_style(id, MarkerStyle::Secondary));
    assert_eq!(
        overlay.marker(id).map(|m| m.style),
        Some(MarkerStyle::Secondary)
    );
}

#[test]
fn remove_all_empties_any_overlay() {
    let mut overlay = MarkerOverlay::new();
    assert_eq!(overlay.remove_all(), 0);

    for i in 0..25 {
        let style = if i % 3 == 0 {
            MarkerStyle::Secondary
        } else {
            MarkerStyle::Primary
        };
        overlay.add_marker(PixelPoint::new(i, i * 2), style);
    }

    assert_eq!(overlay.remove_all(), 25);
    assert!(overlay.is_empty());
    assert!(overlay.snapshot().is_empty());
}

#[test]
fn snapshot_collapses_shared_pixel_to_latest_marker() {
    // Known quirk: persistence is keyed by position, so only one of two
    // markers on the same pixel survives a save.
    let mut overlay = MarkerOverlay::new();
    overlay.add_marker(PixelPoint::new(50, 60), MarkerStyle::Primary);
    overlay.add_marker(PixelPoint::new(50, 60), MarkerStyle::Secondary);
    overlay.add_marker(PixelPoint::new(70, 80), MarkerStyle::Primary);

    let snapshot = overlay.snapshot();

    assert_eq!(overlay.len(), 3);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.get(PixelPoint::new(50, 60)),
        Some(MarkerStyle::Secondary)
    );
}

#[test]
fn restore_recreates_one_marker_per_entry() {
    let set: MarkerSet = [
        (PixelPoint::new(1, 2), MarkerStyle::Primary),
        (PixelPoint::new(3, 4), MarkerStyle::Secondary),
    ]
    .into_iter()
    .collect();

    let mut overlay = MarkerOverlay::new();
    let ids = overlay.restore(&set);

    assert_eq!(ids.len(), 2);
    assert_eq!(overlay.snapshot(), set);
}

#[test]
fn hit_test_prefers_top_most_marker() {
    let mut overlay = MarkerOverlay::new();
    let lower = overlay.add_marker(PixelPoint::new(100, 100), MarkerStyle::Primary);
    let upper = overlay.add_marker(PixelPoint::new(103, 103), MarkerStyle::Primary);

    assert_eq!(overlay.hit_test(PixelPoint::new(101, 101), 5), Some(upper));
    assert_eq!(overlay.hit_test(PixelPoint::new(96, 96), 5), Some(lower));
    assert_eq!(overlay.hit_test(PixelPoint::new(120, 100), 5), None);
}

#[test]
fn marker_set_equality_ignores_insertion_order() {
    let forward: MarkerSet = [
        (PixelPoint::new(1, 1), MarkerStyle::Primary),
        (PixelPoint::new(2, 2), MarkerStyle::Secondary),
    ]
    .into_iter()
    .collect();
    let backward: MarkerSet = [
        (PixelPoint::new(2, 2), MarkerStyle::Secondary),
        (PixelPoint::new(1, 1), MarkerStyle::Primary),
    ]
    .into_iter()
    .collect();

    assert_eq!(forward, backward);
}
