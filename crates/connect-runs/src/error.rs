use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunsError {
  #[error("run not found: {0}")]
  RunNotFound(String),
}
