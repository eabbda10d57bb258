use crate::core::WorldPosition;
use crate::error::ChartResult;

/// Source of the player's live world position, typically a running game client.
///
/// Calls may block on the external process. Any error is turned into a
/// warning by the controller; it never reaches the overlay.
pub trait ExternalPositionProvider {
    fn is_running(&mut self) -> bool;

    /// Prepares the provider for a read. May be a no-op when already calibrated.
    fn calibrate(&mut self) -> ChartResult<()>;

    /// Returns `Ok(None)` when the provider is up but has no position to report.
    fn find_location(&mut self) -> ChartResult<Option<WorldPosition>>;
}

/// Provider used when no external client is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPositionProvider;

impl ExternalPositionProvider for NoPositionProvider {
    fn is_running(&mut self) -> bool {
        false
    }

    fn calibrate(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn find_location(&mut self) -> ChartResult<Option<WorldPosition>> {
        Ok(None)
    }
}

impl<P: ExternalPositionProvider + ?Sized> ExternalPositionProvider for Box<P> {
    fn is_running(&mut self) -> bool {
        (**self).is_running()
    }

    fn calibrate(&mut self) -> ChartResult<()> {
        (**self).calibrate()
    }

    fn find_location(&mut self) -> ChartResult<Option<WorldPosition>> {
        (**self).find_location()
    }
}
