use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{compression_status, file_type};
use crate::common::constants::{
    ANALYSIS_TEAM, ATTR_ALIAS, ATTR_ANALYSIS_COLLECTION, ATTR_ANALYSIS_TEAM,
    ATTR_DATA_COMPRESSION_STATUS, ATTR_DATA_ENCRYPTION_STATUS, ATTR_FILE_TYPE,
    ATTR_MD5_ALL_INPUTS, ATTR_MD5_ALL_INPUTS_SERIAL, ATTR_MD5_CHECKSUM, ATTR_OBJECT_NAME,
    ATTR_PHI_CONTENT, ATTR_PII_CONTENT, ATTR_SAMPLE_NAME, UNSPECIFIED,
};
use crate::common::metadata::MetadataRecord;
use crate::descriptor::UploadMode;
use crate::descriptor::serial::serial_form;
use crate::utils::hash::{ChecksumError, hash_file};
use crate::utils::path::{extension_of, join_collection};

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Input file not found at {0}")]
    SourceNotFound(PathBuf),

    #[error("Input file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    #[error("Failed to resolve input path {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Checksum failed: {0}")]
    Checksum(#[from] ChecksumError),
}

/// Builds the full metadata record for one input file.
///
/// The nine core attributes are always present, in a fixed order, before
/// any mode-specific attributes. Optional attributes are appended only when
/// the corresponding input was supplied; a too-short analysis identifier
/// silently contributes no serial attribute.
pub fn assemble_record(
    input: &Path,
    collection: &str,
    mode: &UploadMode,
) -> Result<MetadataRecord, AssembleError> {
    if !input.is_file() {
        return Err(AssembleError::SourceNotFound(input.to_path_buf()));
    }
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AssembleError::InvalidFileName(input.to_path_buf()))?;

    // Symlinks resolved: the alias names the real on-disk location.
    let real_path = fs::canonicalize(input).map_err(|source| AssembleError::Resolve {
        path: input.to_path_buf(),
        source,
    })?;

    let mut record = MetadataRecord::new();

    // 1. Core attributes, shared by both upload modes.
    record.push(ATTR_PHI_CONTENT, UNSPECIFIED);
    record.push(ATTR_PII_CONTENT, UNSPECIFIED);
    record.push(ATTR_DATA_ENCRYPTION_STATUS, UNSPECIFIED);
    record.push(ATTR_ANALYSIS_TEAM, ANALYSIS_TEAM);
    record.push(ATTR_OBJECT_NAME, join_collection(collection, file_name));
    record.push(ATTR_ALIAS, real_path.to_string_lossy());
    record.push(ATTR_FILE_TYPE, file_type(file_name));
    record.push(
        ATTR_DATA_COMPRESSION_STATUS,
        compression_status(&extension_of(file_name)).as_str(),
    );
    record.push(ATTR_MD5_CHECKSUM, hash_file(input)?);

    // 2. Mode-specific attributes, in their documented order.
    match mode {
        UploadMode::Sample {
            sample_name,
            analysis_id,
            analysis_collection,
        } => {
            if let Some(name) = sample_name {
                record.push(ATTR_SAMPLE_NAME, name.clone());
            }
            if let Some(id) = analysis_id {
                record.push(ATTR_MD5_ALL_INPUTS, id.clone());
                if let Some(serial) = serial_form(id) {
                    record.push(ATTR_MD5_ALL_INPUTS_SERIAL, serial);
                }
            }
            if let Some(path) = analysis_collection {
                record.push(ATTR_ANALYSIS_COLLECTION, path.clone());
            }
        }
        UploadMode::Combined { analysis_id } => {
            if let Some(id) = analysis_id {
                record.push(ATTR_MD5_ALL_INPUTS, id.clone());
                if let Some(serial) = serial_form(id) {
                    record.push(ATTR_MD5_ALL_INPUTS_SERIAL, serial);
                }
            }
        }
    }

    Ok(record)
}
