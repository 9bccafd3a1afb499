//! Error types for the report crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("required fields are blank: {}", .0.join(", "))]
  MissingRequired(Vec<&'static str>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
