use std::collections::BTreeSet;

/// Directory names containing this substring are never descended into
pub const ALWAYS_EXCLUDED_FRAGMENT: &str = "node_modules";

/// ExclusionRules - decides which directories the scanner may enter
///
/// A directory is excluded when its own name (never the full path)
/// contains `node_modules` or equals one of the omitted names exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    omitted: BTreeSet<String>,
}

impl ExclusionRules {
    pub fn new<I, S>(omitted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            omitted: omitted
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }

    pub fn omitted(&self) -> impl Iterator<Item = &str> {
        self.omitted.iter().map(String::as_str)
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        dir_name.contains(ALWAYS_EXCLUDED_FRAGMENT) || self.omitted.contains(dir_name)
    }
}
