pub mod comparison;
pub mod dependency_spec;
pub mod issue;
pub mod project;

pub use comparison::{strip_range_markers, Comparison, IN_SYNC_MARK, OUT_OF_SYNC_MARK};
pub use dependency_spec::{DependencyKind, DependencySpec};
pub use issue::Issue;
pub use project::{DependencyTable, Project};
