mod matcher;

pub use matcher::evaluate;

use std::path::Path;
use tracing::debug;

use crate::coordinate::{parse_classpath, DependencyCoordinate};
use crate::error::Result;
use crate::rules::{support_module, RuleTable};
use crate::version;

/// Determines what to add to the test resources classpath for a user
/// classpath, using the bundled rules and the current library version.
///
/// The result is mostly test resources modules, but may also carry
/// entries of the input itself, such as database drivers.
pub fn infer_test_resources_classpath(
    input: &[DependencyCoordinate],
) -> Vec<DependencyCoordinate> {
    if !version::is_configured() {
        debug!(
            version = version::current(),
            "TEST_RESOURCES_VERSION not set at build time, using crate version"
        );
    }
    RuleTable::bundled().infer(input, version::current())
}

pub fn infer_test_resources_classpath_with_version(
    input: &[DependencyCoordinate],
    version: &str,
) -> Vec<DependencyCoordinate> {
    RuleTable::bundled().infer(input, version)
}

/// Parses `group:artifact[:version]` entries and runs inference with the
/// bundled rules extended by the optional rule file.
pub fn infer_from_notation<S: AsRef<str>>(
    entries: &[S],
    extra_rules: Option<&Path>,
    version: Option<&str>,
) -> Result<Vec<DependencyCoordinate>> {
    let input = parse_classpath(entries)?;
    let version = version.unwrap_or_else(|| version::current());

    match extra_rules {
        Some(path) => {
            let table = RuleTable::bundled_with(&[path])?;
            Ok(table.infer(&input, version))
        }
        None => Ok(RuleTable::bundled().infer(&input, version)),
    }
}

impl RuleTable {
    /// Core support modules first, then each input's matches in input order.
    ///
    /// Duplicates are only collapsed within one input's matches; the same
    /// module triggered by two inputs appears twice.
    pub fn infer(&self, input: &[DependencyCoordinate], version: &str) -> Vec<DependencyCoordinate> {
        let version = if version.trim().is_empty() {
            debug!("blank test resources version, using current");
            version::current()
        } else {
            version
        };

        let mut output: Vec<DependencyCoordinate> = self
            .core_support()
            .iter()
            .map(|id| support_module(id, version))
            .collect();

        for dep in input {
            output.extend(evaluate(dep, input, version, self));
        }

        debug!(
            input = input.len(),
            inferred = output.len(),
            version,
            "inferred test resources classpath"
        );
        output
    }
}
