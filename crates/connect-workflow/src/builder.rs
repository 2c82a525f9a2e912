//! Builder session state.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::NodeConfig;
use crate::error::BuilderError;
use crate::kind::NodeKind;
use crate::node::{Position, WorkflowNode};

/// Name given to a new workflow.
pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";

/// Distance a single nudge moves the selected node.
pub const NUDGE_STEP: i32 = 10;

/// Direction of a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
  Up,
  Down,
  Left,
  Right,
}

impl Nudge {
  fn delta(self) -> (i32, i32) {
    match self {
      Nudge::Up => (0, -NUDGE_STEP),
      Nudge::Down => (0, NUDGE_STEP),
      Nudge::Left => (-NUDGE_STEP, 0),
      Nudge::Right => (NUDGE_STEP, 0),
    }
  }
}

/// In-memory workflow builder.
///
/// Node ids are unique for the lifetime of the builder, including ids of
/// nodes that have since been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Builder {
  name: String,
  nodes: Vec<WorkflowNode>,
  selected: Option<String>,
  new_node_kind: NodeKind,
  #[serde(skip)]
  issued_ids: HashSet<String>,
}

impl Default for Builder {
  fn default() -> Self {
    Self::new(DEFAULT_WORKFLOW_NAME)
  }
}

impl Builder {
  /// Start a session seeded with a webhook trigger and a Slack action.
  pub fn new(name: impl Into<String>) -> Self {
    let mut builder = Self::empty(name);
    builder.insert(
      Position::new(40, 60),
      NodeConfig::default_for(NodeKind::TriggerWebhook),
    );
    builder.insert(
      Position::new(320, 160),
      NodeConfig::default_for(NodeKind::ActionSlack),
    );
    builder
  }

  /// Start a session with no nodes.
  pub fn empty(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      nodes: Vec::new(),
      selected: None,
      new_node_kind: NodeKind::ALL[0],
      issued_ids: HashSet::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn rename(&mut self, name: impl Into<String>) {
    self.name = name.into();
  }

  pub fn nodes(&self) -> &[WorkflowNode] {
    &self.nodes
  }

  pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
    self.nodes.iter().find(|n| n.id == id)
  }

  pub fn selected_id(&self) -> Option<&str> {
    self.selected.as_deref()
  }

  pub fn selected_node(&self) -> Option<&WorkflowNode> {
    self.selected.as_deref().and_then(|id| self.node(id))
  }

  /// Kind the next `add_selected_kind` call will create.
  pub fn new_node_kind(&self) -> NodeKind {
    self.new_node_kind
  }

  pub fn set_new_node_kind(&mut self, kind: NodeKind) {
    self.new_node_kind = kind;
  }

  /// Add a node of the kind chosen in the catalog.
  pub fn add_selected_kind(&mut self) -> String {
    self.add_node(self.new_node_kind)
  }

  /// Add a node with default configuration and select it.
  pub fn add_node(&mut self, kind: NodeKind) -> String {
    let count = self.nodes.len() as i32;
    let position = Position::new(120 + count * 24, 100 + count * 18);
    let id = self.insert(position, NodeConfig::default_for(kind));

    info!(node_id = %id, kind = %kind, "node added");
    self.selected = Some(id.clone());
    id
  }

  /// Select a node on the canvas.
  pub fn select(&mut self, id: &str) -> Result<(), BuilderError> {
    if self.node(id).is_none() {
      return Err(BuilderError::NodeNotFound(id.to_string()));
    }
    self.selected = Some(id.to_string());
    Ok(())
  }

  pub fn clear_selection(&mut self) {
    self.selected = None;
  }

  /// Remove the selected node and clear the selection.
  pub fn delete_selected(&mut self) -> Result<WorkflowNode, BuilderError> {
    let index = self.selected_index()?;
    let node = self.nodes.remove(index);
    self.selected = None;

    info!(node_id = %node.id, "node deleted");
    Ok(node)
  }

  /// Move the selected node by the given offsets.
  pub fn move_selected(&mut self, dx: i32, dy: i32) -> Result<Position, BuilderError> {
    let index = self.selected_index()?;
    let node = &mut self.nodes[index];
    node.position = node.position.offset(dx, dy);
    Ok(node.position)
  }

  /// Nudge the selected node one step in a direction.
  pub fn nudge_selected(&mut self, direction: Nudge) -> Result<Position, BuilderError> {
    let (dx, dy) = direction.delta();
    self.move_selected(dx, dy)
  }

  /// Merge key/value edits into the selected node's configuration.
  ///
  /// Edits are applied atomically: if any key is unknown for the node's kind
  /// the configuration is left untouched.
  pub fn update_selected_config<'a, I>(&mut self, patch: I) -> Result<(), BuilderError>
  where
    I: IntoIterator<Item = (&'a str, &'a str)>,
  {
    let index = self.selected_index()?;
    let mut config = self.nodes[index].config.clone();
    for (key, value) in patch {
      config.set(key, value)?;
    }

    debug!(node_id = %self.nodes[index].id, config = %config.summary(), "node config updated");
    self.nodes[index].config = config;
    Ok(())
  }

  /// Queue a test run of the current workflow.
  ///
  /// There is no execution backend; this only validates that there is
  /// something to run.
  pub fn test_run(&self) -> Result<(), BuilderError> {
    if self.nodes.is_empty() {
      return Err(BuilderError::EmptyWorkflow);
    }
    info!(workflow = %self.name, nodes = self.nodes.len(), "test run queued");
    Ok(())
  }

  fn selected_index(&self) -> Result<usize, BuilderError> {
    let id = self.selected.as_deref().ok_or(BuilderError::NoSelection)?;
    self
      .nodes
      .iter()
      .position(|n| n.id == id)
      .ok_or_else(|| BuilderError::NodeNotFound(id.to_string()))
  }

  fn insert(&mut self, position: Position, config: NodeConfig) -> String {
    let id = self.next_id();
    self.nodes.push(WorkflowNode {
      id: id.clone(),
      position,
      config,
    });
    id
  }

  fn next_id(&mut self) -> String {
    loop {
      let hex = Uuid::new_v4().simple().to_string();
      let id = format!("n_{}", &hex[..8]);
      if self.issued_ids.insert(id.clone()) {
        return id;
      }
    }
  }
}
