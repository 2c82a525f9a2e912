//! Connect Workflow
//!
//! This crate holds the state behind the workflow builder: the catalog of
//! node kinds, the typed configuration each kind carries, and the [`Builder`]
//! that adds, selects, nudges, edits and deletes nodes.
//!
//! Nothing here is persisted. A builder lives for one editing session and
//! guarantees that node ids stay unique for as long as it exists.

mod builder;
mod config;
mod error;
mod kind;
mod node;

pub use builder::{Builder, DEFAULT_WORKFLOW_NAME, NUDGE_STEP, Nudge};
pub use config::{FieldSpec, NodeConfig};
pub use error::BuilderError;
pub use kind::NodeKind;
pub use node::{Position, WorkflowNode};
