use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PixelPoint;

/// Two-valued marker look. Double-clicking a marker swaps between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    #[default]
    #[serde(alias = "CarreBleu")]
    Primary,
    #[serde(alias = "CarreBordeau")]
    Secondary,
}

impl MarkerStyle {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Session-local marker identity. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(u64);

impl MarkerId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: PixelPoint,
    pub style: MarkerStyle,
}

/// One persisted marker record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub style: MarkerStyle,
}

/// Position-keyed marker mapping; the persisted form of an overlay.
///
/// Two markers on the same pixel cannot both be represented: the later
/// insert overwrites the earlier style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MarkerEntry>", into = "Vec<MarkerEntry>")]
pub struct MarkerSet {
    entries: IndexMap<PixelPoint, MarkerStyle>,
}

impl MarkerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the style at `position`, returning the previous style.
    pub fn insert(&mut self, position: PixelPoint, style: MarkerStyle) -> Option<MarkerStyle> {
        self.entries.insert(position, style)
    }

    #[must_use]
    pub fn get(&self, position: PixelPoint) -> Option<MarkerStyle> {
        self.entries.get(&position).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PixelPoint, MarkerStyle)> + '_ {
        self.entries
            .iter()
            .map(|(position, style)| (*position, *style))
    }
}

impl FromIterator<(PixelPoint, MarkerStyle)> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = (PixelPoint, MarkerStyle)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (position, style) in iter {
            set.insert(position, style);
        }
        set
    }
}

impl From<Vec<MarkerEntry>> for MarkerSet {
    fn from(entries: Vec<MarkerEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (PixelPoint::new(entry.x, entry.y), entry.style))
            .collect()
    }
}

impl From<MarkerSet> for Vec<MarkerEntry> {
    fn from(set: MarkerSet) -> Self {
        set.iter()
            .map(|(position, style)| MarkerEntry {
                x: position.x,
                y: position.y,
                style,
            })
            .collect()
    }
}

/// Live markers of the running session.
///
/// Markers are kept in creation order; later markers sit on top for hit
/// testing and win position collisions in [`MarkerOverlay::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct MarkerOverlay {
    markers: Vec<Marker>,
    next_id: u64,
}

impl MarkerOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new marker, even when another one already sits on `position`.
    pub fn add_marker(&mut self, position: PixelPoint, style: MarkerStyle) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.push(Marker {
            id,
            position,
            style,
        });
        trace!(%id, %position, ?style, count = self.markers.len(), "add marker");
        id
    }

    /// Moves a marker and returns its previous position. Unknown ids are ignored.
    pub fn move_marker(&mut self, id: MarkerId, position: PixelPoint) -> Option<PixelPoint> {
        let marker = self.marker_mut(id)?;
        let previous = marker.position;
        marker.position = position;
        trace!(%id, from = %previous, to = %position, "move marker");
        Some(previous)
    }

    /// Returns `false` when `id` is unknown.
    pub fn set_style(&mut self, id: MarkerId, style: MarkerStyle) -> bool {
        let Some(marker) = self.marker_mut(id) else {
            return false;
        };
        marker.style = style;
        trace!(%id, ?style, "set marker style");
        true
    }

    /// Swaps the marker style and returns the new one.
    pub fn toggle_style(&mut self, id: MarkerId) -> Option<MarkerStyle> {
        let style = self.marker(id)?.style.toggled();
        self.set_style(id, style);
        Some(style)
    }

    pub fn remove_marker(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|marker| marker.id == id)?;
        let removed = self.markers.remove(index);
        trace!(%id, count = self.markers.len(), "remove marker");
        Some(removed)
    }

    /// Removes every marker and returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let removed = self.markers.len();
        self.markers.clear();
        trace!(removed, "remove all markers");
        removed
    }

    #[must_use]
    pub fn snapshot(&self) -> MarkerSet {
        self.markers
            .iter()
            .map(|marker| (marker.position, marker.style))
            .collect()
    }

    /// Adds one marker per entry of `set` and returns the new ids.
    pub fn restore(&mut self, set: &MarkerSet) -> Vec<MarkerId> {
        set.iter()
            .map(|(position, style)| self.add_marker(position, style))
            .collect()
    }

    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: MarkerId) -> bool {
        self.marker(id).is_some()
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Finds the top-most marker whose square hit box contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: PixelPoint, half_extent: u32) -> Option<MarkerId> {
        self.markers
            .iter()
            .rev()
            .find(|marker| marker.position.chebyshev_distance(point) <= half_extent)
            .map(|marker| marker.id)
    }

    fn marker_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|marker| marker.id == id)
    }
}
