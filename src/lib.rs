//! Synthetic model file generator for the fastLM engine.
//!
//! Writes a single transformer block's projection weights (W_q, W_k, W_v,
//! W_out) filled with uniform random values, behind a small fixed header.

pub mod config;
pub mod error;
pub mod weights;

pub use config::{load_config, resolve_config, ConfigOverrides, ExportConfig};
pub use error::{ExportError, Result};
pub use weights::{export_model, write_model, ExportSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
