use tracing::{trace, warn};

use crate::core::{ChartProjection, GeoFix, GeoReading, PixelPoint, Projection, WorldPosition};
use crate::error::ChartResult;
use crate::extensions::{
    MarkerId, MarkerOverlay, MarkerSet, MarkerStyle, OverlayEvent, OverlayPlugin,
};
use crate::interaction::{InputEvent, InteractionState, KeyBindings, KeyCommand, PointerButton};

use super::{ExternalPositionProvider, SessionSettings};

/// Result of one handled input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    Ignored,
    MarkerAdded(MarkerId),
    MoveArmed(MarkerId),
    MarkerMoved {
        id: MarkerId,
        from: PixelPoint,
        to: PixelPoint,
    },
    MarkerRemoved(MarkerId),
    StyleToggled {
        id: MarkerId,
        style: MarkerStyle,
    },
    Cleared {
        removed: usize,
    },
    CurrentPosition(MarkCurrentOutcome),
}

/// What happened when the live position was requested.
///
/// Everything but `Marked` leaves the overlay and the controller state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkCurrentOutcome {
    Marked {
        id: MarkerId,
        fix: GeoFix,
        position: PixelPoint,
    },
    ProviderNotRunning,
    LocationUnavailable,
    ForeignFacet {
        facet: i32,
    },
    OutOfRange {
        location: WorldPosition,
    },
    QueryFailed {
        message: String,
    },
}

/// Turns abstract pointer and keyboard input into marker mutations.
///
/// Runs on the host's event thread; every call is synchronous.
pub struct InteractionController<P: ExternalPositionProvider> {
    pub(super) projection: ChartProjection,
    pub(super) overlay: MarkerOverlay,
    pub(super) state: InteractionState,
    pub(super) key_bindings: KeyBindings,
    pub(super) provider: P,
    pub(super) title_prefix: String,
    pub(super) title: String,
    pub(super) hit_half_extent: u32,
    pub(super) plugins: Vec<Box<dyn OverlayPlugin>>,
}

impl<P: ExternalPositionProvider> InteractionController<P> {
    pub fn new(settings: &SessionSettings, provider: P) -> ChartResult<Self> {
        settings.validate()?;
        let projection = ChartProjection::new(&settings.chart)?;
        let title = format!("{} - {}", settings.window_title_prefix, projection.name());
        Ok(Self {
            projection,
            overlay: MarkerOverlay::new(),
            state: InteractionState::Idle,
            key_bindings: settings.key_bindings,
            provider,
            title_prefix: settings.window_title_prefix.clone(),
            title,
            hit_half_extent: settings.marker_hit_half_extent,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn projection(&self) -> &ChartProjection {
        &self.projection
    }

    #[must_use]
    pub fn overlay(&self) -> &MarkerOverlay {
        &self.overlay
    }

    /// Direct overlay access for hosts. A pending move whose marker disappears
    /// this way degrades to a plain canvas click.
    pub fn overlay_mut(&mut self) -> &mut MarkerOverlay {
        &mut self.overlay
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    #[must_use]
    pub fn readout_at(&self, point: PixelPoint) -> GeoReading {
        self.projection.pixel_to_geo(point)
    }

    /// Marker under `point`, using the configured icon hit box.
    #[must_use]
    pub fn target_at(&self, point: PixelPoint) -> Option<MarkerId> {
        self.overlay.hit_test(point, self.hit_half_extent)
    }

    #[must_use]
    pub fn snapshot(&self) -> MarkerSet {
        self.overlay.snapshot()
    }

    /// Seeds the overlay from a persisted marker set.
    pub fn restore_markers(&mut self, markers: &MarkerSet) -> usize {
        let count = self.overlay.restore(markers).len();
        self.emit_overlay_event(OverlayEvent::MarkersRestored { count });
        count
    }

    pub fn handle(&mut self, event: InputEvent) -> InteractionOutcome {
        trace!(?event, state = ?self.state, "input event");
        match event {
            InputEvent::Click {
                button: PointerButton::Primary,
                position,
                target,
            } => self.primary_click(position, target),
            InputEvent::Click {
                button: PointerButton::Secondary,
                position,
                target,
            } => self.secondary_click(position, target),
            InputEvent::DoubleClick { marker } => self.double_click(marker),
            InputEvent::KeyPress { key } => match self.key_bindings.resolve(key) {
                Some(KeyCommand::ClearAll) => self.clear_all(),
                Some(KeyCommand::MarkCurrentPosition) => {
                    InteractionOutcome::CurrentPosition(self.mark_current_position())
                }
                None => InteractionOutcome::Ignored,
            },
        }
    }

    fn primary_click(&mut self, position: PixelPoint, target: Option<MarkerId>) -> InteractionOutcome {
        if let Some(pending) = self.state.cancel_move() {
            if let Some(from) = self.overlay.move_marker(pending, position) {
                self.emit_overlay_event(OverlayEvent::MarkerMoved {
                    id: pending,
                    from,
                    to: position,
                });
                self.report_readout(self.projection.pixel_to_geo(position).to_string());
                return InteractionOutcome::MarkerMoved {
                    id: pending,
                    from,
                    to: position,
                };
            }
            trace!(id = %pending, "pending move target is gone");
            return self.canvas_click(position);
        }

        match target.filter(|id| self.overlay.contains(*id)) {
            Some(id) => {
                self.state.arm_move(id);
                self.emit_overlay_event(OverlayEvent::MoveArmed { id });
                InteractionOutcome::MoveArmed(id)
            }
            None => self.canvas_click(position),
        }
    }

    fn canvas_click(&mut self, position: PixelPoint) -> InteractionOutcome {
        let id = self.add_marker(position, MarkerStyle::Primary);
        self.report_readout(self.projection.pixel_to_geo(position).to_string());
        InteractionOutcome::MarkerAdded(id)
    }

    fn secondary_click(
        &mut self,
        position: PixelPoint,
        target: Option<MarkerId>,
    ) -> InteractionOutcome {
        let Some(id) = target else {
            return InteractionOutcome::MarkerAdded(
                self.add_marker(position, MarkerStyle::Primary),
            );
        };

        self.state.cancel_move();
        if self.overlay.remove_marker(id).is_none() {
            return InteractionOutcome::Ignored;
        }
        self.emit_overlay_event(OverlayEvent::MarkerRemoved { id });
        InteractionOutcome::MarkerRemoved(id)
    }

    fn double_click(&mut self, id: MarkerId) -> InteractionOutcome {
        self.state.cancel_move();
        let Some(style) = self.overlay.toggle_style(id) else {
            return InteractionOutcome::Ignored;
        };
        self.emit_overlay_event(OverlayEvent::StyleChanged { id, style });
        if let Some(marker) = self.overlay.marker(id) {
            let readout = self.projection.pixel_to_geo(marker.position);
            self.report_readout(readout.to_string());
        }
        InteractionOutcome::StyleToggled { id, style }
    }

    fn clear_all(&mut self) -> InteractionOutcome {
        self.state.cancel_move();
        let removed = self.overlay.remove_all();
        self.emit_overlay_event(OverlayEvent::MarkersCleared { removed });
        InteractionOutcome::Cleared { removed }
    }

    fn mark_current_position(&mut self) -> MarkCurrentOutcome {
        match self.query_current_position() {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "current position query failed");
                let message = err.to_string();
                self.emit_overlay_event(OverlayEvent::Warning {
                    message: message.clone(),
                });
                MarkCurrentOutcome::QueryFailed { message }
            }
        }
    }

    fn query_current_position(&mut self) -> ChartResult<MarkCurrentOutcome> {
        if !self.provider.is_running() {
            return Ok(MarkCurrentOutcome::ProviderNotRunning);
        }
        self.provider.calibrate()?;
        let Some(location) = self.provider.find_location()? else {
            return Ok(MarkCurrentOutcome::LocationUnavailable);
        };
        if !self.projection.is_valid_facet(location.facet) {
            trace!(facet = location.facet, "position reported on a foreign facet");
            return Ok(MarkCurrentOutcome::ForeignFacet {
                facet: location.facet,
            });
        }

        let Projection::OnChart(fix) = self.projection.world_to_geo(location.x, location.y) else {
            return Ok(MarkCurrentOutcome::OutOfRange { location });
        };
        let Projection::OnChart(position) = self.projection.geo_to_pixel(fix) else {
            return Ok(MarkCurrentOutcome::OutOfRange { location });
        };

        self.state.cancel_move();
        let id = self.add_marker(position, MarkerStyle::Secondary);
        self.emit_overlay_event(OverlayEvent::CurrentPositionMarked { id, fix });
        self.report_readout(fix.to_string());
        Ok(MarkCurrentOutcome::Marked { id, fix, position })
    }

    fn add_marker(&mut self, position: PixelPoint, style: MarkerStyle) -> MarkerId {
        let id = self.overlay.add_marker(position, style);
        self.emit_overlay_event(OverlayEvent::MarkerAdded {
            id,
            position,
            style,
        });
        id
    }

    fn report_readout(&mut self, readout: String) {
        self.title = format!(
            "{} - {} - {readout}",
            self.title_prefix,
            self.projection.name()
        );
        self.emit_overlay_event(OverlayEvent::TitleChanged {
            title: self.title.clone(),
        });
    }
}
