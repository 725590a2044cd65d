//! Maven-style dependency coordinates as seen on a resolved classpath.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoordinateError;

/// One resolved dependency: `group:artifact[:version]`.
///
/// Group and artifact are non-empty and free of `:` for every constructor,
/// including deserialization, so `module()` is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct DependencyCoordinate {
    group: String,
    artifact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Deserialize)]
struct RawCoordinate {
    group: String,
    artifact: String,
    #[serde(default)]
    version: Option<String>,
}

impl TryFrom<RawCoordinate> for DependencyCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.group, raw.artifact, raw.version)
    }
}

impl DependencyCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Result<Self, CoordinateError> {
        let group = group.into();
        let artifact = artifact.into();

        if group.trim().is_empty() {
            return Err(CoordinateError::invalid(
                format!("{group}:{artifact}"),
                "group must not be empty",
            ));
        }
        if artifact.trim().is_empty() {
            return Err(CoordinateError::invalid(
                format!("{group}:{artifact}"),
                "artifact must not be empty",
            ));
        }
        if group.contains(':') || artifact.contains(':') {
            return Err(CoordinateError::invalid(
                format!("{group}:{artifact}"),
                "group and artifact must not contain ':'",
            ));
        }

        Ok(Self {
            group,
            artifact,
            version: version.filter(|v| !v.trim().is_empty()),
        })
    }

    /// Caller guarantees non-empty group and artifact without `:`.
    pub(crate) fn new_unchecked(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The version-less identity, `group:artifact`.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Compares against a `group:artifact` string without allocating.
    pub fn is_module(&self, module: &str) -> bool {
        module
            .split_once(':')
            .is_some_and(|(group, artifact)| group == self.group && artifact == self.artifact)
    }
}

impl FromStr for DependencyCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact] => Self::new(*group, *artifact, None),
            [group, artifact, version] => {
                if version.trim().is_empty() {
                    return Err(CoordinateError::invalid(s, "version must not be empty"));
                }
                Self::new(*group, *artifact, Some(version.to_string()))
            }
            _ => Err(CoordinateError::invalid(
                s,
                "expected group:artifact or group:artifact:version",
            )),
        }
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

/// Parses a list of `group:artifact[:version]` entries, stopping at the
/// first malformed one.
pub fn parse_classpath<I, S>(entries: I) -> Result<Vec<DependencyCoordinate>, CoordinateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().parse())
        .collect()
}
