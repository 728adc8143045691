use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::transform::StatEntry;

/// Write one criterion per line, newline-terminated, overwriting any prior
/// content at `path`. The handle is scoped to this call; it is flushed and
/// closed before returning.
pub fn write_list(path: &Path, entries: &[StatEntry]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(out, "{}", entry.criterion)?;
    }
    out.flush()
}
