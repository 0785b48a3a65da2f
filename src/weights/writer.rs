//! Model file writer.
//!
//! Serializes the header followed by one block of uniformly random
//! projection weights. The writer is generic over [`Write`] and [`Rng`] so
//! tests can capture bytes in memory and pin the seed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use byteorder::{LittleEndian, WriteBytesExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::weights::format::{self, Projection};

/// What a completed export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File that was written; `None` when serialized to an arbitrary writer.
    pub path: Option<PathBuf>,
    pub layers: i32,
    pub d_model: i32,
    /// Number of f32 weights following the header.
    pub weight_count: usize,
    /// Total bytes written, header included.
    pub bytes_written: usize,
}

/// Write the 12-byte header.
pub fn write_header<W: Write>(out: &mut W, layers: i32, d_model: i32) -> Result<()> {
    out.write_u32::<LittleEndian>(format::MAGIC)?;
    out.write_i32::<LittleEndian>(layers)?;
    out.write_i32::<LittleEndian>(d_model)?;
    Ok(())
}

/// Serialize a full model (header + W_q, W_k, W_v, W_out) into `out`.
///
/// Each weight is drawn independently from `rng`, uniform in `[0, 1)`.
pub fn write_model<W: Write, R: Rng>(
    out: &mut W,
    config: &ExportConfig,
    rng: &mut R,
) -> Result<ExportSummary> {
    config.validate()?;
    write_validated(out, config, rng)
}

fn write_validated<W: Write, R: Rng>(
    out: &mut W,
    config: &ExportConfig,
    rng: &mut R,
) -> Result<ExportSummary> {
    write_header(out, config.layers, config.d_model)?;

    let d = config.d_model as usize;
    let per_matrix = d * d;
    for projection in Projection::ALL {
        tracing::debug!("writing {} ({d}x{d})", projection.name());
        for _ in 0..per_matrix {
            let val: f32 = rng.random();
            out.write_f32::<LittleEndian>(val)?;
        }
    }

    let weight_count = config.weight_count();
    Ok(ExportSummary {
        path: None,
        layers: config.layers,
        d_model: config.d_model,
        weight_count,
        bytes_written: format::HEADER_SIZE + weight_count * std::mem::size_of::<f32>(),
    })
}

/// Create (or truncate) `config.output` and write a model into it.
///
/// The config is validated before the file is opened. The parent directory
/// is not created; a missing directory surfaces as an I/O error and nothing
/// is written.
pub fn export_model(config: &ExportConfig) -> Result<ExportSummary> {
    config.validate()?;

    tracing::info!("creating dummy model file: {}", config.output.display());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let file = File::create(&config.output)?;
    let mut out = BufWriter::new(file);
    let mut summary = write_validated(&mut out, config, &mut rng)?;
    // into_inner flushes the buffer and reports write errors.
    out.into_inner().map_err(|e| e.into_error())?.sync_all()?;

    summary.path = Some(config.output.clone());
    tracing::info!(
        "model saved: {} ({} weights, {} bytes)",
        config.output.display(),
        summary.weight_count,
        summary.bytes_written
    );
    Ok(summary)
}
