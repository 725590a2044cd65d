use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::trace;

use super::rule::{validate_module_id, ArtifactPattern, ClasspathCondition, InferenceRule};
use crate::coordinate::DependencyCoordinate;
use crate::error::RulesError;

pub const TEST_RESOURCES_GROUP: &str = "io.micronaut.testresources";
pub const TEST_RESOURCES_ARTIFACT_PREFIX: &str = "micronaut-test-resources-";

const CORE_SUPPORT: &[&str] = &["server", "testcontainers"];

const MICRONAUT_DATA_PREFIX: &str = "micronaut-data-";
const MICRONAUT_KAFKA: &str = "micronaut-kafka";
const MICRONAUT_MQTT: &str = "micronaut-mqtt";
const MICRONAUT_NEO4J: &str = "micronaut-neo4j";
const MICRONAUT_DATA_MONGODB: &str = "micronaut-data-mongodb";
const MYSQL_CONNECTOR_JAVA: &str = "mysql-connector-java";

const MYSQL_MYSQL_CONNECTOR_JAVA: &str = "mysql:mysql-connector-java";
const POSTGRESQL: &str = "org.postgresql:postgresql";
const MARIADB_JAVA_CLIENT: &str = "org.mariadb.jdbc:mariadb-java-client";
const MONGODB_DRIVER_ASYNC: &str = "org.mongodb:mongodb-driver-async";
const MONGODB_DRIVER_SYNC: &str = "org.mongodb:mongodb-driver-sync";
const MONGODB_DRIVER_REACTIVESTREAMS: &str = "org.mongodb:mongodb-driver-reactivestreams";

static BUNDLED: OnceLock<RuleTable> = OnceLock::new();

/// Builds the coordinate of a test resources support module from its short id.
pub fn support_module(id: &str, version: &str) -> DependencyCoordinate {
    DependencyCoordinate::new_unchecked(
        TEST_RESOURCES_GROUP,
        format!("{TEST_RESOURCES_ARTIFACT_PREFIX}{id}"),
        Some(version.to_string()),
    )
}

/// An ordered rule set plus the support modules that are always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default = "default_core_support")]
    core_support: Vec<String>,
    #[serde(default)]
    rules: Vec<InferenceRule>,
}

fn default_core_support() -> Vec<String> {
    CORE_SUPPORT.iter().map(|s| s.to_string()).collect()
}

impl RuleTable {
    pub fn new(core_support: Vec<String>, rules: Vec<InferenceRule>) -> Self {
        Self {
            core_support,
            rules,
        }
    }

    /// The built-in Micronaut rule set, built once per process.
    pub fn bundled() -> &'static RuleTable {
        BUNDLED.get_or_init(|| {
            trace!("building bundled rule table");
            Self::new(
                default_core_support(),
                vec![
                    InferenceRule::artifact(MICRONAUT_KAFKA, "kafka"),
                    InferenceRule::artifact(MICRONAUT_MQTT, "hivemq"),
                    InferenceRule::artifact(MICRONAUT_DATA_MONGODB, "mongodb"),
                    InferenceRule::predicate(
                        ArtifactPattern::StartsWith(MICRONAUT_NEO4J.into()),
                        ClasspathCondition::Always,
                        "neo4j",
                    ),
                    InferenceRule::predicate(
                        ArtifactPattern::StartsWith(MICRONAUT_DATA_PREFIX.into()),
                        ClasspathCondition::AnyArtifact(MYSQL_CONNECTOR_JAVA.into()),
                        "jdbc-mysql",
                    ),
                    InferenceRule::predicate(
                        ArtifactPattern::StartsWith(MICRONAUT_DATA_PREFIX.into()),
                        ClasspathCondition::AnyModule(POSTGRESQL.into()),
                        "jdbc-postgresql",
                    ),
                    InferenceRule::predicate(
                        ArtifactPattern::StartsWith(MICRONAUT_DATA_PREFIX.into()),
                        ClasspathCondition::AnyModule(MARIADB_JAVA_CLIENT.into()),
                        "jdbc-mariadb",
                    ),
                    InferenceRule::passthrough([
                        MYSQL_MYSQL_CONNECTOR_JAVA,
                        POSTGRESQL,
                        MARIADB_JAVA_CLIENT,
                        MONGODB_DRIVER_ASYNC,
                        MONGODB_DRIVER_SYNC,
                        MONGODB_DRIVER_REACTIVESTREAMS,
                    ]),
                ],
            )
        })
    }

    pub fn core_support(&self) -> &[String] {
        &self.core_support
    }

    pub fn rules(&self) -> &[InferenceRule] {
        &self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn push(&mut self, rule: InferenceRule) {
        self.rules.push(rule);
    }

    /// Appends the rules of `other` after this table's own. Core support
    /// modules not already present are appended too.
    pub fn extend(&mut self, other: RuleTable) {
        for id in other.core_support {
            if !self.core_support.contains(&id) {
                self.core_support.push(id);
            }
        }
        self.rules.extend(other.rules);
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for id in &self.core_support {
            validate_module_id(id)
                .map_err(|message| RulesError::invalid_core_support(id, message))?;
        }
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate()
                .map_err(|message| RulesError::invalid_rule(index, message))?;
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::bundled().clone()
    }
}
