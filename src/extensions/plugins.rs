use serde::{Deserialize, Serialize};

use crate::core::{GeoFix, PixelPoint};
use crate::extensions::markers::{MarkerId, MarkerStyle};
use crate::interaction::InteractionState;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayContext {
    pub markers_len: usize,
    pub interaction_state: InteractionState,
}

/// Event stream exposed to plugins: what a renderer needs to stay in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayEvent {
    MarkersRestored {
        count: usize,
    },
    MarkerAdded {
        id: MarkerId,
        position: PixelPoint,
        style: MarkerStyle,
    },
    MoveArmed {
        id: MarkerId,
    },
    MarkerMoved {
        id: MarkerId,
        from: PixelPoint,
        to: PixelPoint,
    },
    MarkerRemoved {
        id: MarkerId,
    },
    StyleChanged {
        id: MarkerId,
        style: MarkerStyle,
    },
    MarkersCleared {
        removed: usize,
    },
    CurrentPositionMarked {
        id: MarkerId,
        fix: GeoFix,
    },
    TitleChanged {
        title: String,
    },
    Warning {
        message: String,
    },
}

/// Extension hook interface for rendering and other observers.
///
/// Plugins observe overlay events without mutating overlay internals directly.
pub trait OverlayPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &OverlayEvent, context: OverlayContext);
}
