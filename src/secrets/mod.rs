//! Secret collection.
//!
//! Builds the read-only lookup structure that templates are rendered against,
//! from one of two sources: a mounted directory tree or prefixed environment
//! variables.

mod env;
mod files;

pub use env::collect_from_env;
pub use files::collect_from_files;

use crate::config::SecretSource;
use crate::error::{RenderError, Result};
use minijinja::value::Value;
use serde::Serialize;
use std::collections::HashMap;

/// Secrets collected for one invocation.
///
/// The shape follows the source. Mounted files produce groups named after
/// their parent directory, addressed in templates as
/// `{{ Secrets.<group>.<key> }}`. Environment variables produce a single flat
/// namespace, addressed as `{{ <KEY> }}`. Within a group, a duplicate key name
/// overwrites the earlier value (last write wins).
#[derive(Debug, Clone)]
pub enum SecretStore {
    Grouped(HashMap<String, HashMap<String, String>>),
    Flat(HashMap<String, String>),
}

#[derive(Serialize)]
struct GroupedContext<'a> {
    #[serde(rename = "Secrets")]
    secrets: &'a HashMap<String, HashMap<String, String>>,
}

impl SecretStore {
    /// Collect secrets from the configured source.
    pub fn collect(source: &SecretSource) -> Result<Self> {
        match source {
            SecretSource::Files(root) => Ok(Self::Grouped(collect_from_files(root)?)),
            SecretSource::EnvPrefix(prefix) => Ok(Self::Flat(collect_from_env(prefix))),
        }
    }

    /// Build the template context matching this store's shape.
    pub fn context(&self) -> Value {
        match self {
            Self::Grouped(groups) => Value::from_serialize(GroupedContext { secrets: groups }),
            Self::Flat(values) => Value::from_serialize(values),
        }
    }
}

/// Look up the first present key among `candidates`, in order.
///
/// Supports deployments where the same logical secret arrives under alternate
/// variable names. Fails when none of the candidates is present.
pub fn first_matching_key<'a>(
    values: &'a HashMap<String, String>,
    candidates: &[&str],
) -> Result<&'a str> {
    candidates
        .iter()
        .find_map(|key| values.get(*key))
        .map(String::as_str)
        .ok_or_else(|| RenderError::KeyNotFound {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        })
}
