mod coordinate;
mod rules;

pub use coordinate::CoordinateError;
pub use rules::RulesError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type Result<T> = std::result::Result<T, Error>;
