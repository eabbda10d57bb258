//! Marker storage and observer hooks layered on top of the projection core.

pub mod markers;
pub mod plugins;

pub use markers::{Marker, MarkerEntry, MarkerId, MarkerOverlay, MarkerSet, MarkerStyle};
pub use plugins::{OverlayContext, OverlayEvent, OverlayPlugin};
