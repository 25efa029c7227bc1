//! Resolved configuration and the raw document shape it is parsed from.

use crate::task::Task;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// A fully resolved configuration document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Declared arguments, passed through uninterpreted.
    pub args: HashMap<String, Value>,

    /// Resolved tasks, keyed by the names of the document's task section.
    pub tasks: HashMap<String, Task>,

    /// Variable mapping, passed through raw. Always present; an absent
    /// section resolves to an empty mapping.
    pub variables: HashMap<String, String>,

    /// Document version, if declared.
    pub version: Option<String>,
}

/// Loosely-typed mirror of the top-level document, used only while task
/// entries are classified. It does not outlive the parse call.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub args: HashMap<String, Value>,

    #[serde(default)]
    pub tasks: HashMap<String, Value>,

    /// Accepted in documents but not interpreted by the resolver.
    #[serde(default)]
    #[allow(dead_code)]
    pub quiet: bool,

    #[serde(default)]
    pub variables: HashMap<String, String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Shape classification of one raw task entry.
///
/// A single document field supports three authoring styles without a
/// discriminator tag. The cost is weak validation: a URL-looking local
/// path (or the reverse) cannot be told apart beyond the substring sniff.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskReference {
    /// A string containing "http": resolved over the network.
    Remote(String),

    /// Any other string: resolved from the filesystem.
    Local(PathBuf),

    /// An inline mapping: parsed in place.
    Inline(Value),

    /// Any other shape: contributes no task and raises no error.
    Unsupported,
}

impl TaskReference {
    /// Classify a raw task entry by shape.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::String(reference) if reference.contains("http") => {
                Self::Remote(reference.clone())
            }
            Value::String(reference) => Self::Local(PathBuf::from(reference)),
            Value::Mapping(_) => Self::Inline(value.clone()),
            _ => Self::Unsupported,
        }
    }
}
