use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerSet;

/// Durable storage for the position → style marker mapping.
///
/// Read once when a session opens and written once when it closes.
pub trait PersistenceGateway {
    /// Returns `Ok(None)` when no store exists yet at `path`.
    fn load(&mut self, path: &Path) -> ChartResult<Option<MarkerSet>>;

    fn save(&mut self, path: &Path, markers: &MarkerSet) -> ChartResult<()>;
}

/// Marker store kept as a versioned JSON document on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl PersistenceGateway for JsonFileStore {
    fn load(&mut self, path: &Path) -> ChartResult<Option<MarkerSet>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "marker store not found");
                return Ok(None);
            }
            Err(err) => {
                return Err(ChartError::PersistenceRead {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        // An empty file carries no document yet and is treated like a missing one.
        if raw.trim().is_empty() {
            debug!(path = %path.display(), "marker store is empty");
            return Ok(None);
        }

        let markers =
            MarkerSet::from_json_compat_str(&raw).map_err(|err| ChartError::PersistenceRead {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        debug!(path = %path.display(), count = markers.len(), "loaded marker store");
        Ok(Some(markers))
    }

    fn save(&mut self, path: &Path, markers: &MarkerSet) -> ChartResult<()> {
        let write_error = |reason: String| ChartError::PersistenceWrite {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| write_error(err.to_string()))?;
        }
        let document = markers
            .to_json_contract_v1_pretty()
            .map_err(|err| write_error(err.to_string()))?;
        fs::write(path, document).map_err(|err| write_error(err.to_string()))?;
        debug!(path = %path.display(), count = markers.len(), "saved marker store");
        Ok(())
    }
}
