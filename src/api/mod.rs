//! Host-facing surface: controller, session lifecycle, collaborator traits.

mod controller;
mod json_contract;
mod persistence;
mod plugin_dispatch;
mod position_provider;
mod session;
mod settings;

pub use controller::{InteractionController, InteractionOutcome, MarkCurrentOutcome};
pub use json_contract::{MARKER_STORE_JSON_SCHEMA_V1, MarkerStoreJsonContractV1};
pub use persistence::{JsonFileStore, PersistenceGateway};
pub use position_provider::{ExternalPositionProvider, NoPositionProvider};
pub use session::{ChartSession, ReadFailurePolicy, SessionStart, ShutdownReport};
pub use settings::{DEFAULT_STORE_FILE, DEFAULT_WINDOW_TITLE_PREFIX, SessionSettings};
