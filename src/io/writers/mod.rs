//! Output encoders. Every writer encodes into a temporary file in the
//! destination directory and renames it over the target, so an overwritten
//! input is never left half-written if encoding fails.

pub mod png;
pub mod webp;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

fn write_atomically<F>(output: &Path, encode: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".logoprep-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode(&mut writer)?;
        writer.flush()?;
    }

    tmp.persist(output).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
