//! Test Resources Classpath
//!
//! Infers which test resources support modules, and which database
//! drivers, belong on the test resources classpath given the dependencies
//! of a user project. Inference is a pure function of its input; reading
//! rule files is the only I/O the crate performs.

pub mod coordinate;
pub mod error;
pub mod inference;
pub mod logging;
pub mod rules;
pub mod version;

pub use coordinate::DependencyCoordinate;
pub use error::{CoordinateError, Error, Result, RulesError};
pub use inference::{
    evaluate, infer_from_notation, infer_test_resources_classpath,
    infer_test_resources_classpath_with_version,
};
pub use rules::RuleTable;
