use serde::{Deserialize, Serialize};

use super::table::support_module;
use crate::coordinate::DependencyCoordinate;

/// A single entry of the rule table.
///
/// Rules are pure data: whether one fires depends only on the dependency
/// under evaluation and the full input classpath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InferenceRule {
    /// Fires when the artifact name is exactly `artifact`.
    Artifact { artifact: String, emit: Emission },

    /// Fires when the artifact name matches `artifact` and the classpath
    /// satisfies `classpath`.
    Predicate {
        artifact: ArtifactPattern,
        #[serde(default)]
        classpath: ClasspathCondition,
        emit: Emission,
    },

    /// Re-emits the dependency itself when its module is listed.
    Passthrough { modules: Vec<String> },
}

impl InferenceRule {
    pub fn artifact(artifact: impl Into<String>, module_id: impl Into<String>) -> Self {
        Self::Artifact {
            artifact: artifact.into(),
            emit: Emission::Module(module_id.into()),
        }
    }

    pub fn predicate(
        artifact: ArtifactPattern,
        classpath: ClasspathCondition,
        module_id: impl Into<String>,
    ) -> Self {
        Self::Predicate {
            artifact,
            classpath,
            emit: Emission::Module(module_id.into()),
        }
    }

    pub fn passthrough<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Passthrough {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Self::Artifact { artifact, emit } => {
                if artifact.trim().is_empty() {
                    return Err("artifact name must not be empty".to_string());
                }
                emit.validate()
            }
            Self::Predicate {
                artifact,
                classpath,
                emit,
            } => {
                artifact.validate()?;
                classpath.validate()?;
                emit.validate()
            }
            Self::Passthrough { modules } => {
                if modules.is_empty() {
                    return Err("passthrough rule must list at least one module".to_string());
                }
                match modules.iter().find(|m| !is_module_id(m)) {
                    Some(bad) => Err(format!("'{bad}' is not a group:artifact module")),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Test applied to the artifact name of the dependency under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactPattern {
    Equals(String),
    StartsWith(String),
}

impl ArtifactPattern {
    pub fn matches(&self, artifact: &str) -> bool {
        match self {
            Self::Equals(name) => artifact == name.as_str(),
            Self::StartsWith(prefix) => artifact.starts_with(prefix.as_str()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let value = match self {
            Self::Equals(v) | Self::StartsWith(v) => v,
        };
        if value.trim().is_empty() {
            return Err("artifact pattern must not be empty".to_string());
        }
        Ok(())
    }
}

/// Test applied to the whole input classpath, the evaluated dependency
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClasspathCondition {
    #[default]
    Always,
    AnyArtifact(String),
    AnyModule(String),
}

impl ClasspathCondition {
    pub fn holds(&self, classpath: &[DependencyCoordinate]) -> bool {
        match self {
            Self::Always => true,
            Self::AnyArtifact(name) => classpath.iter().any(|d| d.artifact() == name),
            Self::AnyModule(module) => classpath.iter().any(|d| d.is_module(module)),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Always => Ok(()),
            Self::AnyArtifact(name) if name.trim().is_empty() => {
                Err("classpath artifact must not be empty".to_string())
            }
            Self::AnyModule(module) if !is_module_id(module) => {
                Err(format!("'{module}' is not a group:artifact module"))
            }
            _ => Ok(()),
        }
    }
}

/// What a firing rule contributes to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emission {
    /// A test resources support module, by short id (e.g. `kafka`).
    Module(String),
    /// An explicit coordinate, emitted as is.
    Dependency(DependencyCoordinate),
}

impl Emission {
    pub fn resolve(&self, version: &str) -> DependencyCoordinate {
        match self {
            Self::Module(id) => support_module(id, version),
            Self::Dependency(dep) => dep.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Module(id) => validate_module_id(id),
            Self::Dependency(_) => Ok(()),
        }
    }
}

/// A support module id becomes part of an artifact name.
pub(crate) fn validate_module_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err("module id must not be empty".to_string());
    }
    if id.contains(':') {
        return Err(format!("module id '{id}' must not contain ':'"));
    }
    Ok(())
}

fn is_module_id(module: &str) -> bool {
    module
        .split_once(':')
        .is_some_and(|(group, artifact)| {
            !group.trim().is_empty() && !artifact.trim().is_empty() && !artifact.contains(':')
        })
}
