mod cross_referencer;
mod manifest_parser;
mod version_table;

pub use cross_referencer::{CrossReferenceOptions, CrossReferenceOutcome, CrossReferencer};
pub use manifest_parser::{ManifestParser, ParsedManifest, MANIFEST_FILENAME};
pub use version_table::VersionTable;
