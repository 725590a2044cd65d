use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::table::RuleTable;
use crate::error::RulesError;

impl RuleTable {
    /// Loads a rule file, picking the format from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RulesError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading rule table");

        let content = fs::read_to_string(path)
            .map_err(|e| RulesError::rules_file_read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let table: RuleTable = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| RulesError::rules_parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| RulesError::rules_parse_error(path, e.to_string()))?,
            _ => return Err(RulesError::unsupported_format(extension)),
        };

        table.validate()?;
        debug!(
            rules = table.rule_count(),
            core_support = table.core_support().len(),
            "rule table loaded"
        );
        Ok(table)
    }

    pub fn from_json_str(content: &str) -> Result<Self, RulesError> {
        trace!("parsing json rule table");
        let table: RuleTable = serde_json::from_str(content)
            .map_err(|e| RulesError::rules_parse_error("<inline>", e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, RulesError> {
        trace!("parsing yaml rule table");
        let table: RuleTable = serde_yaml::from_str(content)
            .map_err(|e| RulesError::rules_parse_error("<inline>", e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// The bundled table followed by the rules of each file, in order.
    pub fn bundled_with<P: AsRef<Path>>(paths: &[P]) -> Result<Self, RulesError> {
        let mut table = Self::bundled().clone();
        for path in paths {
            table.extend(Self::load(path)?);
        }
        Ok(table)
    }
}
