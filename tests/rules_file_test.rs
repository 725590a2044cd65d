use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use test_resources_classpath::rules::support_module;
use test_resources_classpath::{infer_from_notation, DependencyCoordinate, RuleTable, RulesError};

const ORACLE_RULES: &str = r#"
core_support:
  - server
  - testcontainers
rules:
  - kind: predicate
    artifact:
      starts_with: micronaut-data-
    classpath:
      any_module: com.oracle.database.jdbc:ojdbc8
    emit:
      module: jdbc-oracle-xe
  - kind: passthrough
    modules:
      - com.oracle.database.jdbc:ojdbc8
"#;

fn dep(notation: &str) -> DependencyCoordinate {
    notation.parse().unwrap()
}

#[test]
fn test_user_rules_extend_bundled_rules() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("oracle.yaml");
    fs::write(&path, ORACLE_RULES).unwrap();

    let table = RuleTable::bundled_with(&[&path]).unwrap();
    let oracle = dep("com.oracle.database.jdbc:ojdbc8:21.5.0.0");
    let input = vec![
        dep("io.micronaut.data:micronaut-data-jdbc:3.4.0"),
        dep("org.postgresql:postgresql:42.3.4"),
        oracle.clone(),
    ];

    let result = table.infer(&input, "1.0.0");

    assert_eq!(
        result,
        vec![
            support_module("server", "1.0.0"),
            support_module("testcontainers", "1.0.0"),
            support_module("jdbc-postgresql", "1.0.0"),
            support_module("jdbc-oracle-xe", "1.0.0"),
            dep("org.postgresql:postgresql:42.3.4"),
            oracle,
        ]
    );
}

#[test]
fn test_json_rule_file_emitting_explicit_dependency() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("h2.json");
    fs::write(
        &path,
        r#"{
            "core_support": [],
            "rules": [
                {
                    "kind": "artifact",
                    "artifact": "micronaut-jdbc-hikari",
                    "emit": {"dependency": {"group": "com.h2database", "artifact": "h2", "version": "2.1.212"}}
                }
            ]
        }"#,
    )
    .unwrap();

    let table = RuleTable::load(&path).unwrap();
    let result = table.infer(&[dep("io.micronaut.sql:micronaut-jdbc-hikari")], "1.0.0");

    assert_eq!(result, vec![dep("com.h2database:h2:2.1.212")]);
}

#[test]
fn test_invalid_rule_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    fs::write(
        &path,
        "rules:\n  - kind: artifact\n    artifact: micronaut-kafka\n    emit:\n      module: \"\"\n",
    )
    .unwrap();

    let err = RuleTable::load(&path).unwrap_err();

    assert!(matches!(err, RulesError::InvalidRule { index: 0, .. }));
}

#[test]
fn test_invalid_coordinate_in_rule_file_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"rules": [{"kind": "artifact", "artifact": "x", "emit": {"dependency": {"group": "", "artifact": "h2"}}}]}"#,
    )
    .unwrap();

    let err = RuleTable::load(&path).unwrap_err();

    assert!(matches!(err, RulesError::RulesParseError { .. }));
}

#[test]
fn test_infer_from_notation_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("oracle.yaml");
    fs::write(&path, ORACLE_RULES).unwrap();

    let result = infer_from_notation(
        &[
            "io.micronaut.data:micronaut-data-jdbc:3.4.0",
            "com.oracle.database.jdbc:ojdbc8:21.5.0.0",
        ],
        Some(path.as_path()),
        Some("1.0.0"),
    )
    .unwrap();

    let rendered: Vec<String> = result.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "io.micronaut.testresources:micronaut-test-resources-server:1.0.0",
            "io.micronaut.testresources:micronaut-test-resources-testcontainers:1.0.0",
            "io.micronaut.testresources:micronaut-test-resources-jdbc-oracle-xe:1.0.0",
            "com.oracle.database.jdbc:ojdbc8:21.5.0.0",
        ]
    );
}
