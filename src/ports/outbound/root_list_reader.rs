use crate::shared::Result;
use std::path::Path;

/// RootListReader port for reading a newline-delimited list of scan roots
pub trait RootListReader {
    /// Returns one root per non-empty line, in file order
    ///
    /// # Errors
    /// Returns an error if the list file cannot be read
    fn read_roots(&self, list_path: &Path) -> Result<Vec<String>>;
}
