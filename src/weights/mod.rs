//! Model weight file generation.
//!
//! - [`format`]: binary layout constants and size arithmetic
//! - [`writer`]: header and weight serialization, file export

pub mod format;
pub mod writer;

pub use self::format::{Projection, MAGIC};
pub use self::writer::{export_model, write_header, write_model, ExportSummary};
