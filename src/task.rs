//! The task record produced by document resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One runnable unit as declared in a configuration document.
///
/// The resolver parses tasks out of inline mappings, local files, and
/// remote documents, and hands them back without interpreting any field;
/// execution semantics belong to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub args: HashMap<String, serde_yaml::Value>,

    #[serde(default)]
    pub commands: Vec<String>,

    #[serde(default)]
    pub deps: Vec<String>,

    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default)]
    pub interval: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub usage: Option<String>,

    #[serde(default)]
    pub variables: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_fragment() {
        let fragment = "\
summary: Build the project
usage: build [--release]
commands:
  - cargo build
  - cargo test
deps:
  - generate
dir: ./backend
variables:
  profile: debug
";

        let task: Task = serde_yaml::from_str(fragment).unwrap();

        assert_eq!(task.summary.as_deref(), Some("Build the project"));
        assert_eq!(task.usage.as_deref(), Some("build [--release]"));
        assert_eq!(task.commands, vec!["cargo build", "cargo test"]);
        assert_eq!(task.deps, vec!["generate"]);
        assert_eq!(task.dir.as_deref(), Some("./backend"));
        assert_eq!(task.variables.get("profile").map(String::as_str), Some("debug"));
    }

    #[test]
    fn test_deserialize_minimal_fragment() {
        let task: Task = serde_yaml::from_str("commands:\n  - echo hi\n").unwrap();

        assert_eq!(task.commands, vec!["echo hi"]);
        assert!(task.summary.is_none());
        assert!(task.deps.is_empty());
        assert!(task.variables.is_empty());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let task = Task {
            commands: vec!["echo hi".to_string()],
            summary: Some("Say hi".to_string()),
            ..Task::default()
        };

        let fragment = serde_yaml::to_string(&task).unwrap();
        let reparsed: Task = serde_yaml::from_str(&fragment).unwrap();

        assert_eq!(task, reparsed);
    }
}
