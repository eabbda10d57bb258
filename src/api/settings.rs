use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::ChartProfile;
use crate::error::{ChartError, ChartResult};
use crate::interaction::KeyBindings;

pub const DEFAULT_STORE_FILE: &str = "preferences.json";
pub const DEFAULT_WINDOW_TITLE_PREFIX: &str = "SeaChart";

/// Session bootstrap settings.
///
/// Built once at startup and handed to the session, controller and store.
/// Serializable so hosts can keep it next to the marker store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default)]
    pub chart: ChartProfile,
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default = "default_window_title_prefix")]
    pub window_title_prefix: String,
    /// Half side of the square hit box of a marker icon, in pixels.
    #[serde(default = "default_marker_hit_half_extent")]
    pub marker_hit_half_extent: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            chart: ChartProfile::default(),
            store_path: default_store_path(),
            key_bindings: KeyBindings::default(),
            window_title_prefix: default_window_title_prefix(),
            marker_hit_half_extent: default_marker_hit_half_extent(),
        }
    }
}

impl SessionSettings {
    #[must_use]
    pub fn with_chart(mut self, chart: ChartProfile) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ChartError::InvalidData(
                "store path must not be empty".to_owned(),
            ));
        }
        if self
            .key_bindings
            .clear_all
            .eq_ignore_ascii_case(&self.key_bindings.mark_current_position)
        {
            return Err(ChartError::InvalidData(format!(
                "key `{}` is bound to more than one command",
                self.key_bindings.clear_all
            )));
        }
        Ok(())
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_window_title_prefix() -> String {
    DEFAULT_WINDOW_TITLE_PREFIX.to_owned()
}

fn default_marker_hit_half_extent() -> u32 {
    5
}
