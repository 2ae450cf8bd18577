use std::path::Path;

/// Joins a destination collection path and a file name into an object name.
///
/// Collection paths are POSIX-style strings naming a container in the
/// remote store, so this is a string join, not a filesystem operation.
///
/// Examples:
/// - ("/Archive/Project", "a.txt") -> "/Archive/Project/a.txt"
/// - ("/Archive/Project/", "a.txt") -> "/Archive/Project/a.txt"
/// - ("", "a.txt") -> "a.txt"
pub fn join_collection(collection: &str, file_name: &str) -> String {
    if collection.is_empty() {
        return file_name.to_string();
    }
    if collection.ends_with('/') {
        format!("{collection}{file_name}")
    } else {
        format!("{collection}/{file_name}")
    }
}

/// Returns the lowercased final extension of a file name, or `""` when the
/// name has none (including dotfiles like `.bashrc`).
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_collection() {
        assert_eq!(
            join_collection("/Archive/Project", "a.txt"),
            "/Archive/Project/a.txt"
        );
        assert_eq!(
            join_collection("/Archive/Project/", "a.txt"),
            "/Archive/Project/a.txt"
        );
        assert_eq!(join_collection("", "a.txt"), "a.txt");
        assert_eq!(join_collection("Flowcell_X", "r.fastq"), "Flowcell_X/r.fastq");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("sample.fastq.gz"), "gz");
        assert_eq!(extension_of("reads.BAM"), "bam");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("archive.tar"), "tar");
    }
}
