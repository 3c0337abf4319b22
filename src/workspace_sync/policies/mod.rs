mod exclusion_rules;

pub use exclusion_rules::{ExclusionRules, ALWAYS_EXCLUDED_FRAGMENT};
