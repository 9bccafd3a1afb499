//! Error types for `dossier-core`.

use thiserror::Error;

use crate::resource::DisplayUrl;

#[derive(Debug, Error)]
pub enum Error {
  #[error("display url {0} is not live")]
  ReleaseFailed(DisplayUrl),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
