mod assemble;
mod serial;
mod write;

pub use assemble::{AssembleError, assemble_record};
pub use serial::serial_form;
pub use write::{WriteError, descriptor_path, write_descriptor};

/// How a batch of input files is being uploaded.
///
/// Each variant carries only the optional attributes valid for that mode,
/// so a combined record can never pick up sample-only attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadMode {
    /// One sample's files, optionally tied to a named sample and an
    /// analysis collection in the archive.
    Sample {
        sample_name: Option<String>,
        analysis_id: Option<String>,
        analysis_collection: Option<String>,
    },
    /// Combined multi-sample outputs; only the analysis identifier may be
    /// attached.
    Combined { analysis_id: Option<String> },
}
