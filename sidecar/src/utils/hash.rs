use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};

/// Size of the read buffer used while hashing. Content is streamed so
/// arbitrarily large inputs never have to fit in memory.
const HASH_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("Failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Computes the hex-encoded MD5 digest of a file's content.
///
/// The digest is a pure function of the bytes read; chunking is an
/// implementation detail and never affects the result. A read failure
/// aborts with `ChecksumError::Read` rather than returning a partial hash.
pub fn hash_file(path: &Path) -> Result<String, ChecksumError> {
    let mut file = fs::File::open(path).map_err(|source| ChecksumError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Md5::new();
    let mut buffer = [0u8; HASH_BUFFER_SIZE];
    loop {
        let n = file.read(&mut buffer).map_err(|source| ChecksumError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
