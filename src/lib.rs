//! sea-chart: calibrated sea chart overlay engine.
//!
//! The crate converts between pixels of a displayed chart image and the
//! degree-based coordinates of a game world, and turns pointer/keyboard input
//! into marker edits that persist between sessions. Rendering is left to the
//! host, which observes the overlay through plugins.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartSession, InteractionController, SessionSettings};
pub use error::{ChartError, ChartResult};
