use std::fmt;

use crate::common::constants::{COMPRESSED_EXTENSIONS, OVERRIDE_EXEMPT_TYPES};

/// Compression status of an input file, as recorded in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionStatus {
    Compressed,
    NotCompressed,
}

impl CompressionStatus {
    /// The controlled-vocabulary value stored in the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionStatus::Compressed => "Compressed",
            CompressionStatus::NotCompressed => "Not Compressed",
        }
    }
}

impl fmt::Display for CompressionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an extension against the fixed compressed-extension set.
///
/// The match is exact and case-sensitive; callers pass the lowercased
/// extension without its leading dot.
pub fn compression_status(extension: &str) -> CompressionStatus {
    if COMPRESSED_EXTENSIONS.contains(&extension) {
        CompressionStatus::Compressed
    } else {
        CompressionStatus::NotCompressed
    }
}

/// Infers the archive file type from a filename.
///
/// Trailing characters drawn from `{g, z, .}` are stripped first. This is
/// character-class stripping, not literal `.gz` removal: `x.gz.gz` loses
/// both suffixes and `report.html` is untouched. The uppercased final
/// dot-delimited segment of the stripped name is the default type; the
/// `counts` override is checked before `fastq`, and neither applies to
/// `MD5` or `JSON` files.
pub fn file_type(filename: &str) -> String {
    let stripped = filename.trim_end_matches(['g', 'z', '.']);
    let default_type = stripped
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_uppercase();

    let lowered = stripped.to_lowercase();
    let exempt = OVERRIDE_EXEMPT_TYPES.contains(&default_type.as_str());

    if lowered.contains("counts") && !exempt {
        "COUNTS".to_string()
    } else if lowered.contains("fastq") && !exempt {
        "FASTQ".to_string()
    } else {
        default_type
    }
}
