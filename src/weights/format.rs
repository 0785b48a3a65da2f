//! fastLM model file layout.
//!
//! ```text
//! [4 bytes: magic 0xFEEDBEEF (u32 LE)]
//! [4 bytes: layers (i32 LE)]
//! [4 bytes: d_model (i32 LE)]
//! [4 * d_model^2 * 4 bytes: W_q, W_k, W_v, W_out (f32 LE, row-major)]
//! ```

/// Format identifier written at offset 0.
pub const MAGIC: u32 = 0xFEED_BEEF;

/// Size of the fixed header (magic + layers + d_model).
pub const HEADER_SIZE: usize = 12;

/// Number of square projection matrices stored per block.
pub const MATRICES_PER_BLOCK: usize = 4;

/// Projection matrices of one attention block, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Query,
    Key,
    Value,
    Output,
}

impl Projection {
    /// All projections in the order they are serialized.
    pub const ALL: [Projection; MATRICES_PER_BLOCK] = [
        Projection::Query,
        Projection::Key,
        Projection::Value,
        Projection::Output,
    ];

    /// Conventional weight name (e.g. `W_q`).
    pub fn name(self) -> &'static str {
        match self {
            Projection::Query => "W_q",
            Projection::Key => "W_k",
            Projection::Value => "W_v",
            Projection::Output => "W_out",
        }
    }
}

/// Number of f32 weights in the file for a given hidden dimension.
///
/// Only one block's worth is ever stored: the count does not depend on the
/// `layers` header field, so a header claiming more than one layer describes
/// weights that are not present.
pub fn weight_count(d_model: usize) -> usize {
    MATRICES_PER_BLOCK * d_model * d_model
}

/// Total file size in bytes: `12 + 16 * d_model^2`.
pub fn expected_file_size(d_model: usize) -> usize {
    HEADER_SIZE + weight_count(d_model) * std::mem::size_of::<f32>()
}
