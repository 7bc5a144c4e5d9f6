//! Shared infrastructure for the Kalshi gateway.
//!
//! Currently provides environment selection (production vs. demo) and
//! logging initialization used by every binary.

mod environment;
mod logging;

pub use environment::{KalshiEnvironment, ParseEnvironmentError};
pub use logging::init_logging;
