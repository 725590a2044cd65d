use tracing::trace;

use crate::coordinate::DependencyCoordinate;
use crate::rules::{InferenceRule, RuleTable};

/// Evaluates every rule of `rules` against `dep`.
///
/// Classpath conditions see the whole of `all`, `dep` included. Output
/// follows rule declaration order with exact duplicates collapsed to their
/// first occurrence. Core support modules are not part of this evaluation.
pub fn evaluate(
    dep: &DependencyCoordinate,
    all: &[DependencyCoordinate],
    version: &str,
    rules: &RuleTable,
) -> Vec<DependencyCoordinate> {
    let mut output: Vec<DependencyCoordinate> = Vec::new();

    for rule in rules.rules() {
        let Some(emitted) = apply(rule, dep, all, version) else {
            continue;
        };
        if output.contains(&emitted) {
            continue;
        }
        trace!(input = %dep, inferred = %emitted, "rule matched");
        output.push(emitted);
    }

    output
}

fn apply(
    rule: &InferenceRule,
    dep: &DependencyCoordinate,
    all: &[DependencyCoordinate],
    version: &str,
) -> Option<DependencyCoordinate> {
    match rule {
        InferenceRule::Artifact { artifact, emit } => {
            (dep.artifact() == artifact.as_str()).then(|| emit.resolve(version))
        }
        InferenceRule::Predicate {
            artifact,
            classpath,
            emit,
        } => (artifact.matches(dep.artifact()) && classpath.holds(all))
            .then(|| emit.resolve(version)),
        InferenceRule::Passthrough { modules } => modules
            .iter()
            .any(|m| dep.is_module(m))
            .then(|| dep.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{support_module, ArtifactPattern, ClasspathCondition};

    const VERSION: &str = "1.0.0";

    fn dep(notation: &str) -> DependencyCoordinate {
        notation.parse().unwrap()
    }

    #[test]
    fn test_no_rule_matches() {
        let input = dep("io.micronaut:micronaut-http-client:3.5.0");
        let result = evaluate(&input, &[input.clone()], VERSION, RuleTable::bundled());
        assert!(result.is_empty());
    }

    #[test]
    fn test_exact_artifact_rule() {
        let input = dep("io.micronaut.mqtt:micronaut-mqtt:2.0.0");
        let result = evaluate(&input, &[input.clone()], VERSION, RuleTable::bundled());
        assert_eq!(result, vec![support_module("hivemq", VERSION)]);
    }

    #[test]
    fn test_neo4j_prefix_rule_always_holds() {
        let input = dep("io.micronaut.neo4j:micronaut-neo4j-bolt:5.0.0");
        let result = evaluate(&input, &[input.clone()], VERSION, RuleTable::bundled());
        assert_eq!(result, vec![support_module("neo4j", VERSION)]);
    }

    #[test]
    fn test_predicate_needs_driver_on_classpath() {
        let data = dep("io.micronaut.data:micronaut-data-jdbc:3.4.0");
        let alone = evaluate(&data, &[data.clone()], VERSION, RuleTable::bundled());
        assert!(alone.is_empty());

        let all = vec![data.clone(), dep("org.mariadb.jdbc:mariadb-java-client:3.0.4")];
        let with_driver = evaluate(&data, &all, VERSION, RuleTable::bundled());
        assert_eq!(with_driver, vec![support_module("jdbc-mariadb", VERSION)]);
    }

    #[test]
    fn test_multiple_drivers_keep_rule_order() {
        let data = dep("io.micronaut.data:micronaut-data-r2dbc:3.4.0");
        let all = vec![
            dep("org.mariadb.jdbc:mariadb-java-client"),
            data.clone(),
            dep("org.postgresql:postgresql"),
            dep("mysql:mysql-connector-java"),
        ];

        let result = evaluate(&data, &all, VERSION, RuleTable::bundled());

        assert_eq!(
            result,
            vec![
                support_module("jdbc-mysql", VERSION),
                support_module("jdbc-postgresql", VERSION),
                support_module("jdbc-mariadb", VERSION),
            ]
        );
    }

    #[test]
    fn test_passthrough_reemits_dependency_unchanged() {
        let driver = dep("org.mongodb:mongodb-driver-reactivestreams:4.6.0");
        let result = evaluate(&driver, &[driver.clone()], VERSION, RuleTable::bundled());
        assert_eq!(result, vec![driver]);
    }

    #[test]
    fn test_classpath_condition_sees_dependency_itself() {
        let table = RuleTable::new(
            vec![],
            vec![InferenceRule::predicate(
                ArtifactPattern::Equals("micronaut-data-mongodb".into()),
                ClasspathCondition::AnyArtifact("micronaut-data-mongodb".into()),
                "self",
            )],
        );
        let input = dep("io.micronaut.data:micronaut-data-mongodb");

        let result = evaluate(&input, &[input.clone()], VERSION, &table);

        assert_eq!(result, vec![support_module("self", VERSION)]);
    }

    #[test]
    fn test_identical_emissions_collapse() {
        let table = RuleTable::new(
            vec![],
            vec![
                InferenceRule::artifact("micronaut-kafka", "kafka"),
                InferenceRule::artifact("micronaut-kafka", "kafka-streams"),
                InferenceRule::predicate(
                    ArtifactPattern::StartsWith("micronaut-kafka".into()),
                    ClasspathCondition::Always,
                    "kafka",
                ),
            ],
        );
        let input = dep("io.micronaut.kafka:micronaut-kafka");

        let result = evaluate(&input, &[input.clone()], VERSION, &table);

        assert_eq!(
            result,
            vec![
                support_module("kafka", VERSION),
                support_module("kafka-streams", VERSION),
            ]
        );
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let data = dep("io.micronaut.data:micronaut-data-jdbc");
        let all = vec![data.clone(), dep("mysql:mysql-connector-java:8.0.29")];

        let first = evaluate(&data, &all, VERSION, RuleTable::bundled());
        let second = evaluate(&data, &all, VERSION, RuleTable::bundled());

        assert_eq!(first, second);
    }
}
