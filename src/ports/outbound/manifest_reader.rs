use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading manifest contents
pub trait ManifestReader: Send + Sync {
    /// Reads the content of one manifest, following symlinks
    ///
    /// # Errors
    /// Returns an error if the file no longer exists, is not a regular
    /// file, is too large, or cannot be read
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
