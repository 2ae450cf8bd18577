use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::common::constants::DESCRIPTOR_SUFFIX;
use crate::common::metadata::MetadataRecord;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to determine descriptor path for {path}: {source}")]
    ResolveOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write descriptor {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize descriptor {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The descriptor lives next to its input: the absolute input path with
/// `.metadata.json` appended. Symlinks are not resolved here; the sidecar
/// lands beside the path the user named.
pub fn descriptor_path(input: &Path) -> Result<PathBuf, WriteError> {
    let absolute = std::path::absolute(input).map_err(|source| WriteError::ResolveOutput {
        path: input.to_path_buf(),
        source,
    })?;
    let mut name = absolute.into_os_string();
    name.push(DESCRIPTOR_SUFFIX);
    Ok(PathBuf::from(name))
}

/// Serializes a record to its descriptor file, overwriting any existing
/// file at that path.
///
/// Output is deterministic and diff-friendly: 4-space indentation and
/// lexicographic key order within every object.
pub fn write_descriptor(record: &MetadataRecord, output_path: &Path) -> Result<(), WriteError> {
    println!("Creating descriptor file {}", output_path.display());

    let io_err = |source| WriteError::Io {
        path: output_path.to_path_buf(),
        source,
    };

    let file = fs::File::create(output_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|source| WriteError::Serialize {
            path: output_path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(io_err)?;
    Ok(())
}
