//! Report stream output.

use std::io::Write;

use crate::extractors::base::ElementLabel;

/// Write one report line per label:
/// `<relativeFilePath> (<line>,<column>): <label>`.
pub fn write_report<W: Write>(
    out: &mut W,
    file_path: &str,
    labels: &[ElementLabel],
) -> std::io::Result<()> {
    for entry in labels {
        writeln!(
            out,
            "{} ({},{}): {}",
            file_path, entry.line, entry.column, entry.label
        )?;
    }
    Ok(())
}
