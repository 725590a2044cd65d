//! The rule table: which ecosystem artifacts pull in which support modules.
mod loader;
mod rule;
mod table;

pub use rule::{ArtifactPattern, ClasspathCondition, Emission, InferenceRule};
pub use table::{
    support_module, RuleTable, TEST_RESOURCES_ARTIFACT_PREFIX, TEST_RESOURCES_GROUP,
};

pub use crate::error::RulesError;
