use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid dependency coordinate '{coordinate}': {reason}")]
    InvalidDependencyCoordinate { coordinate: String, reason: String },
}

impl CoordinateError {
    pub fn invalid(coordinate: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDependencyCoordinate {
            coordinate: coordinate.into(),
            reason: reason.into(),
        }
    }
}
