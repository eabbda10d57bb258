use crate::error::{ChartError, ChartResult};
use crate::extensions::{OverlayContext, OverlayEvent, OverlayPlugin};

use super::{ExternalPositionProvider, InteractionController};

impl<P: ExternalPositionProvider> InteractionController<P> {
    pub fn register_plugin(&mut self, plugin: Box<dyn OverlayPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.iter().any(|entry| entry.id() == plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub(super) fn overlay_context(&self) -> OverlayContext {
        OverlayContext {
            markers_len: self.overlay.len(),
            interaction_state: self.state,
        }
    }

    pub(super) fn emit_overlay_event(&mut self, event: OverlayEvent) {
        let context = self.overlay_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
