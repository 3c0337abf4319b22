/// Filesystem adapters: manifest discovery, file reads and report output
mod directory_scanner;
mod file_reader;
mod file_writer;

pub use directory_scanner::FileSystemScanner;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
