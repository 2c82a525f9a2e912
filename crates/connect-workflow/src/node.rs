use serde::{Deserialize, Serialize};

use crate::config::NodeConfig;
use crate::kind::NodeKind;

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

impl Position {
  pub fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// Position shifted by the given offsets, clamped to the `i32` range.
  pub fn offset(self, dx: i32, dy: i32) -> Self {
    Self {
      x: self.x.saturating_add(dx),
      y: self.y.saturating_add(dy),
    }
  }
}

/// A single step placed on the builder canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowNode {
  pub id: String,
  #[serde(flatten)]
  pub position: Position,
  /// Typed configuration; its variant determines the node kind.
  pub config: NodeConfig,
}

impl WorkflowNode {
  pub fn kind(&self) -> NodeKind {
    self.config.kind()
  }

  pub fn label(&self) -> &'static str {
    self.kind().label()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_serialized_node() {
    let node = WorkflowNode {
      id: "n_0badf00d".to_string(),
      position: Position::new(40, 60),
      config: NodeConfig::default_for(NodeKind::TriggerWebhook),
    };

    assert_eq!(
      serde_json::to_value(&node).unwrap(),
      json!({
        "id": "n_0badf00d",
        "x": 40,
        "y": 60,
        "config": {"type": "trigger_webhook", "path": "/hook"}
      })
    );
    assert_eq!(node.label(), "Trigger: Webhook");
  }

  #[test]
  fn test_offset() {
    assert_eq!(Position::new(10, 10).offset(-10, 5), Position::new(0, 15));
    assert_eq!(
      Position::new(i32::MAX - 1, i32::MIN + 1).offset(10, -10),
      Position::new(i32::MAX, i32::MIN)
    );
  }
}
