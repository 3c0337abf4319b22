use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size (100 MB)
/// A package.json is a few kilobytes; anything near this limit is not a manifest.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and resolves to a regular file
///
/// Symbolic links are followed; what matters is the file they point at.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "package.json")
///
/// # Errors
/// Returns an error if:
/// - The path or its link target doesn't exist
/// - The path does not resolve to a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a file after the regular-file and size checks have passed.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD; only I/O errors fail
/// the read.
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    let file_size = validate_regular_file(path, file_description)?;
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
