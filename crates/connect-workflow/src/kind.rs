use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

/// The kinds of node the builder can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
  TriggerWebhook,
  TriggerSchedule,
  ActionEmail,
  ActionSlack,
  ActionSheets,
}

impl NodeKind {
  /// Every kind, in catalog order.
  pub const ALL: [NodeKind; 5] = [
    NodeKind::TriggerWebhook,
    NodeKind::TriggerSchedule,
    NodeKind::ActionEmail,
    NodeKind::ActionSlack,
    NodeKind::ActionSheets,
  ];

  /// Wire name, e.g. `trigger_webhook`.
  pub fn as_str(&self) -> &'static str {
    match self {
      NodeKind::TriggerWebhook => "trigger_webhook",
      NodeKind::TriggerSchedule => "trigger_schedule",
      NodeKind::ActionEmail => "action_email",
      NodeKind::ActionSlack => "action_slack",
      NodeKind::ActionSheets => "action_sheets",
    }
  }

  /// Label shown in the catalog and on canvas nodes.
  pub fn label(&self) -> &'static str {
    match self {
      NodeKind::TriggerWebhook => "Trigger: Webhook",
      NodeKind::TriggerSchedule => "Trigger: Schedule",
      NodeKind::ActionEmail => "Action: Email",
      NodeKind::ActionSlack => "Action: Slack",
      NodeKind::ActionSheets => "Action: Google Sheets",
    }
  }

  pub fn is_trigger(&self) -> bool {
    matches!(self, NodeKind::TriggerWebhook | NodeKind::TriggerSchedule)
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for NodeKind {
  type Err = BuilderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    NodeKind::ALL
      .into_iter()
      .find(|kind| kind.as_str() == s)
      .ok_or_else(|| BuilderError::UnknownKind(s.to_string()))
  }
}
