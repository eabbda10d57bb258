use std::collections::HashMap;

use proptest::prelude::*;
use sea_chart::core::PixelPoint;
use sea_chart::extensions::{MarkerOverlay, MarkerSet, MarkerStyle};

fn style_strategy() -> impl Strategy<Value = MarkerStyle> {
    prop_oneof![Just(MarkerStyle::Primary), Just(MarkerStyle::Secondary)]
}

fn entries_strategy() -> impl Strategy<Value = Vec<(PixelPoint, MarkerStyle)>> {
    prop::collection::vec(
        ((0i32..16, 0i32..16), style_strategy())
            .prop_map(|((x, y), style)| (PixelPoint::new(x, y), style)),
        0..64,
    )
}

proptest! {
    #[test]
    fn restore_of_snapshot_reproduces_unique_set(
        entries in prop::collection::hash_map((0i32..640, 0i32..520), style_strategy(), 0..64)
    ) {
        let set: MarkerSet = entries
            .iter()
            .map(|(&(x, y), &style)| (PixelPoint::new(x, y), style))
            .collect();

        let mut overlay = MarkerOverlay::new();
        overlay.restore(&set);
        prop_assert_eq!(overlay.len(), set.len());
        prop_assert_eq!(overlay.snapshot(), set);
    }

    #[test]
    fn duplicate_positions_collapse_to_last_writer(entries in entries_strategy()) {
        let mut overlay = MarkerOverlay::new();
        let mut expected = HashMap::new();
        for (position, style) in &entries {
            overlay.add_marker(*position, *style);
            expected.insert(*position, *style);
        }

        let snapshot = overlay.snapshot();
        prop_assert_eq!(overlay.len(), entries.len());
        prop_assert_eq!(snapshot.len(), expected.len());
        for (position, style) in expected {
            prop_assert_eq!(snapshot.get(position), Some(style));
        }

        let mut restored = MarkerOverlay::new();
        restored.restore(&snapshot);
        prop_assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn moves_touch_only_their_marker(
        entries in entries_strategy(),
        pick in any::<prop::sample::Index>(),
        target in (0i32..640, 0i32..520)
    ) {
        prop_assume!(!entries.is_empty());
        let mut overlay = MarkerOverlay::new();
        let ids: Vec<_> = entries
            .iter()
            .map(|(position, style)| overlay.add_marker(*position, *style))
            .collect();

        let moved = ids[pick.index(ids.len())];
        overlay.move_marker(moved, PixelPoint::new(target.0, target.1));

        for (id, (position, style)) in ids.iter().zip(&entries) {
            let marker = overlay.marker(*id).expect("marker still present");
            prop_assert_eq!(marker.style, *style);
            if *id == moved {
                prop_assert_eq!(marker.position, PixelPoint::new(target.0, target.1));
            } else {
                prop_assert_eq!(marker.position, *position);
            }
        }
    }
}
