use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Which manifest table a dependency was declared in
///
/// Serializes as its manifest key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DependencyKind {
    #[serde(rename = "dependencies")]
    Runtime,
    #[serde(rename = "devDependencies")]
    Dev,
}

impl DependencyKind {
    /// The manifest key the dependency table lives under
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Dev => "devDependencies",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_key())
    }
}

/// A dependency's declared value, read without assuming its type
///
/// npm expects a string specifier, but nothing stops a manifest from
/// holding an object or a number there. Those are kept as `Unsupported`
/// so the cross-reference can report them per dependency.
#[derive(Debug, Clone, PartialEq)]
pub enum DependencySpec {
    Version(String),
    Unsupported(Value),
}

impl DependencySpec {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(spec) => DependencySpec::Version(spec),
            other => DependencySpec::Unsupported(other),
        }
    }

    pub fn as_version(&self) -> Option<&str> {
        match self {
            DependencySpec::Version(spec) => Some(spec.as_str()),
            DependencySpec::Unsupported(_) => None,
        }
    }

    /// JSON type name of the declared value, used in warnings
    pub fn type_name(&self) -> &'static str {
        match self {
            DependencySpec::Version(_) => "string",
            DependencySpec::Unsupported(Value::Null) => "null",
            DependencySpec::Unsupported(Value::Bool(_)) => "boolean",
            DependencySpec::Unsupported(Value::Number(_)) => "number",
            DependencySpec::Unsupported(Value::String(_)) => "string",
            DependencySpec::Unsupported(Value::Array(_)) => "array",
            DependencySpec::Unsupported(Value::Object(_)) => "object",
        }
    }
}

impl From<&str> for DependencySpec {
    fn from(spec: &str) -> Self {
        DependencySpec::Version(spec.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_string() {
        let spec = DependencySpec::from_value(json!("^1.0.0"));
        assert_eq!(spec, DependencySpec::Version("^1.0.0".to_string()));
        assert_eq!(spec.as_version(), Some("^1.0.0"));
    }

    #[test]
    fn test_from_value_object_is_unsupported() {
        let spec = DependencySpec::from_value(json!({"version": "1.0.0"}));
        assert!(spec.as_version().is_none());
        assert_eq!(spec.type_name(), "object");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(DependencySpec::from_value(json!(1)).type_name(), "number");
        assert_eq!(DependencySpec::from_value(json!(null)).type_name(), "null");
        assert_eq!(DependencySpec::from_value(json!([])).type_name(), "array");
        assert_eq!(DependencySpec::from_value(json!(true)).type_name(), "boolean");
    }

    #[test]
    fn test_dependency_kind_display() {
        assert_eq!(DependencyKind::Runtime.to_string(), "dependencies");
        assert_eq!(DependencyKind::Dev.to_string(), "devDependencies");
        assert!(DependencyKind::Runtime < DependencyKind::Dev);
    }

    #[test]
    fn test_dependency_kind_serializes_as_manifest_key() {
        assert_eq!(serde_json::to_value(DependencyKind::Runtime).unwrap(), json!("dependencies"));
        assert_eq!(serde_json::to_value(DependencyKind::Dev).unwrap(), json!("devDependencies"));
    }
}
