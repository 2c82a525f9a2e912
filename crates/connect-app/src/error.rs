use connect_runs::RunsError;
use connect_workflow::BuilderError;
use thiserror::Error;

use crate::route::Route;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
  /// The action belongs to a page that is not currently shown.
  #[error("action requires the {expected} page, current page is {current}")]
  WrongPage { expected: Route, current: Route },

  #[error(transparent)]
  Builder(#[from] BuilderError),

  #[error(transparent)]
  Runs(#[from] RunsError),
}
