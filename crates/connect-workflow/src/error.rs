use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
  #[error("no node selected")]
  NoSelection,

  #[error("node not found: {0}")]
  NodeNotFound(String),

  #[error("unknown node type: {0}")]
  UnknownKind(String),

  #[error("node type '{kind}' has no field '{field}'")]
  UnknownField { kind: String, field: String },

  #[error("workflow has no nodes")]
  EmptyWorkflow,
}
