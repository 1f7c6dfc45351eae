// crates/travelmap-core/src/loader/common_io.rs
use crate::error::{Result, TravelError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Whether `path` should be read and written through gzip.
pub fn is_compressed(path: &Path) -> bool {
    cfg!(feature = "compact") && path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("state file not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_compressed(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Writes `bytes` to `path`, gzip-compressed when `compress` is set.
pub fn write_bytes(path: &Path, bytes: &[u8], compress: bool) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        if compress {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(bytes)?;
            encoder.finish()?.flush()?;
            return Ok(());
        }
    }
    #[cfg(not(feature = "compact"))]
    let _ = compress;

    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
