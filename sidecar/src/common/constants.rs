// --- Controlled vocabularies ---

/// Extensions treated as compressed by the archive (closed set, lowercase).
pub const COMPRESSED_EXTENSIONS: [&str; 10] = [
    "bz2", "gz", "bam", "xz", "rar", "tar", "tbz2", "tgz", "zip", "7z",
];

/// File types that are never overridden by filename-substring rules.
pub const OVERRIDE_EXEMPT_TYPES: [&str; 2] = ["MD5", "JSON"];

// --- Sentinel attribute values ---

/// Value recorded for attributes the tool cannot determine locally.
pub const UNSPECIFIED: &str = "Unspecified";

/// Fixed provenance team recorded on every record.
pub const ANALYSIS_TEAM: &str = "CCBR";

// --- Core attribute names, in record order ---

pub const ATTR_PHI_CONTENT: &str = "phi_content";
pub const ATTR_PII_CONTENT: &str = "pii_content";
pub const ATTR_DATA_ENCRYPTION_STATUS: &str = "data_encryption_status";
pub const ATTR_ANALYSIS_TEAM: &str = "analysis_team";
pub const ATTR_OBJECT_NAME: &str = "object_name";
pub const ATTR_ALIAS: &str = "alias";
pub const ATTR_FILE_TYPE: &str = "file_type";
pub const ATTR_DATA_COMPRESSION_STATUS: &str = "data_compression_status";
pub const ATTR_MD5_CHECKSUM: &str = "md5_checksum";

// --- Optional attribute names ---

pub const ATTR_SAMPLE_NAME: &str = "sample_name";
pub const ATTR_MD5_ALL_INPUTS: &str = "md5_all_inputs";
pub const ATTR_MD5_ALL_INPUTS_SERIAL: &str = "md5_all_inputs_serial";
pub const ATTR_ANALYSIS_COLLECTION: &str = "analysis_collection";

// --- Output naming ---

/// Suffix appended to the absolute input path to name its descriptor.
pub const DESCRIPTOR_SUFFIX: &str = ".metadata.json";
