//! Convert FoxESS JSON history exports into a semicolon-delimited table.
//!
//! Each variable in the export becomes a column, and each distinct reading
//! instant becomes a row. Missing readings are left as empty cells.

pub mod csv_out;
pub mod error;
pub mod model;
pub mod readings;
pub mod timestamp;

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

pub use error::{ExportError, Result};
pub use model::{Export, Variable};

/// Read and parse a whole export file.
pub fn load_export(path: &Path) -> Result<Export> {
    let bytes = std::fs::read(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let export = Export::from_slice(&bytes)?;
    if export.errno != 0 {
        warn!("Export reports errno {}, converting anyway", export.errno);
    }
    debug!(
        "Parsed {} variables with {} readings",
        export.variables.len(),
        export.reading_count()
    );
    Ok(export)
}

/// Load `path` and write the table to `out`. Returns the number of data rows.
///
/// Nothing is written unless the whole document parsed.
pub fn convert<W: Write>(path: &Path, out: W) -> Result<usize> {
    let export = load_export(path)?;
    let rows = csv_out::write_export(&export, out)?;
    debug!("Wrote {} rows", rows);
    Ok(rows)
}
