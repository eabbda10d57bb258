use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerSet;
use crate::interaction::InputEvent;

use super::{
    ExternalPositionProvider, InteractionController, InteractionOutcome, PersistenceGateway,
    SessionSettings,
};

/// Host decision after the marker store failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    /// Overwrite the unreadable store with an empty one; prior markers are lost.
    StartFresh,
    /// End the session so the store can be fixed by hand.
    Abort,
}

pub enum SessionStart<G: PersistenceGateway, P: ExternalPositionProvider> {
    Ready(ChartSession<G, P>),
    Aborted,
}

impl<G: PersistenceGateway, P: ExternalPositionProvider> SessionStart<G, P> {
    #[must_use]
    pub fn ready(self) -> Option<ChartSession<G, P>> {
        match self {
            Self::Ready(session) => Some(session),
            Self::Aborted => None,
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Outcome of the shutdown save. A failed save never blocks shutdown.
#[derive(Debug)]
pub struct ShutdownReport {
    pub markers_saved: usize,
    pub error: Option<ChartError>,
}

impl ShutdownReport {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.error.is_none()
    }
}

/// One chart run: load at open, interactive events, save at close.
pub struct ChartSession<G: PersistenceGateway, P: ExternalPositionProvider> {
    settings: SessionSettings,
    store: G,
    controller: InteractionController<P>,
}

impl<G: PersistenceGateway, P: ExternalPositionProvider> ChartSession<G, P> {
    /// Loads the marker store and seeds the overlay.
    ///
    /// A missing store is replaced by a fresh empty one. An unreadable store
    /// is handed to `on_read_error`, which picks between starting fresh and
    /// aborting. Failing to write the fresh store is an error.
    pub fn open(
        settings: SessionSettings,
        mut store: G,
        provider: P,
        on_read_error: impl FnOnce(&ChartError) -> ReadFailurePolicy,
    ) -> ChartResult<SessionStart<G, P>> {
        let mut controller = InteractionController::new(&settings, provider)?;
        let path = settings.store_path.as_path();

        match store.load(path) {
            Ok(Some(markers)) => {
                controller.restore_markers(&markers);
            }
            Ok(None) => {
                debug!(path = %path.display(), "creating fresh marker store");
                store.save(path, &MarkerSet::new())?;
            }
            Err(err) => {
                warn!(error = %err, "marker store could not be read");
                match on_read_error(&err) {
                    ReadFailurePolicy::StartFresh => {
                        debug!(path = %path.display(), "replacing unreadable marker store");
                        store.save(path, &MarkerSet::new())?;
                    }
                    ReadFailurePolicy::Abort => {
                        debug!("session aborted after store read failure");
                        return Ok(SessionStart::Aborted);
                    }
                }
            }
        }

        debug!(
            chart = controller.projection().name(),
            markers = controller.overlay().len(),
            "session opened"
        );
        Ok(SessionStart::Ready(Self {
            settings,
            store,
            controller,
        }))
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController<P> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController<P> {
        &mut self.controller
    }

    pub fn handle(&mut self, event: InputEvent) -> InteractionOutcome {
        self.controller.handle(event)
    }

    /// Snapshots the overlay and writes it back to the store.
    ///
    /// Markers sharing a pixel collapse to the latest one here.
    pub fn close(mut self) -> ShutdownReport {
        let markers = self.controller.snapshot();
        let markers_saved = markers.len();
        match self.store.save(&self.settings.store_path, &markers) {
            Ok(()) => {
                debug!(markers_saved, "session closed");
                ShutdownReport {
                    markers_saved,
                    error: None,
                }
            }
            Err(err) => {
                warn!(error = %err, "marker store could not be written at shutdown");
                ShutdownReport {
                    markers_saved: 0,
                    error: Some(err),
                }
            }
        }
    }
}
