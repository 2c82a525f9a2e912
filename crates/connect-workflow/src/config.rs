use serde::{Deserialize, Serialize};

use crate::error::BuilderError;
use crate::kind::NodeKind;

/// Type-specific node configuration.
///
/// Each variant carries the fields its node kind edits in the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeConfig {
  TriggerWebhook {
    path: String,
  },
  TriggerSchedule {
    cron: String,
  },
  ActionEmail {
    to: String,
  },
  ActionSlack {
    channel: String,
  },
  ActionSheets {
    #[serde(rename = "spreadsheetId")]
    spreadsheet_id: String,
  },
}

/// Describes the inspector field for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
  /// Configuration key, e.g. `spreadsheetId`.
  pub key: &'static str,
  pub label: &'static str,
  pub placeholder: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hint: Option<&'static str>,
}

impl NodeConfig {
  /// Configuration a freshly added node starts with.
  pub fn default_for(kind: NodeKind) -> Self {
    match kind {
      NodeKind::TriggerWebhook => NodeConfig::TriggerWebhook {
        path: "/hook".to_string(),
      },
      NodeKind::TriggerSchedule => NodeConfig::TriggerSchedule {
        cron: "0 9 * * 1-5".to_string(),
      },
      NodeKind::ActionEmail => NodeConfig::ActionEmail {
        to: "user@example.com".to_string(),
      },
      NodeKind::ActionSlack => NodeConfig::ActionSlack {
        channel: "#alerts".to_string(),
      },
      NodeKind::ActionSheets => NodeConfig::ActionSheets {
        spreadsheet_id: "sheet-id".to_string(),
      },
    }
  }

  pub fn kind(&self) -> NodeKind {
    match self {
      NodeConfig::TriggerWebhook { .. } => NodeKind::TriggerWebhook,
      NodeConfig::TriggerSchedule { .. } => NodeKind::TriggerSchedule,
      NodeConfig::ActionEmail { .. } => NodeKind::ActionEmail,
      NodeConfig::ActionSlack { .. } => NodeKind::ActionSlack,
      NodeConfig::ActionSheets { .. } => NodeKind::ActionSheets,
    }
  }

  /// The editor field for this configuration.
  pub fn field(&self) -> FieldSpec {
    match self {
      NodeConfig::TriggerWebhook { .. } => FieldSpec {
        key: "path",
        label: "Webhook path",
        placeholder: "/hook",
        hint: None,
      },
      NodeConfig::TriggerSchedule { .. } => FieldSpec {
        key: "cron",
        label: "CRON",
        placeholder: "0 9 * * 1-5",
        hint: Some("Example: 0 9 * * 1-5"),
      },
      NodeConfig::ActionEmail { .. } => FieldSpec {
        key: "to",
        label: "To",
        placeholder: "user@example.com",
        hint: None,
      },
      NodeConfig::ActionSlack { .. } => FieldSpec {
        key: "channel",
        label: "Channel",
        placeholder: "#alerts",
        hint: None,
      },
      NodeConfig::ActionSheets { .. } => FieldSpec {
        key: "spreadsheetId",
        label: "Spreadsheet ID",
        placeholder: "sheet-id",
        hint: None,
      },
    }
  }

  fn value_mut(&mut self) -> &mut String {
    match self {
      NodeConfig::TriggerWebhook { path } => path,
      NodeConfig::TriggerSchedule { cron } => cron,
      NodeConfig::ActionEmail { to } => to,
      NodeConfig::ActionSlack { channel } => channel,
      NodeConfig::ActionSheets { spreadsheet_id } => spreadsheet_id,
    }
  }

  /// Current value of the editable field.
  pub fn value(&self) -> &str {
    match self {
      NodeConfig::TriggerWebhook { path } => path.as_str(),
      NodeConfig::TriggerSchedule { cron } => cron.as_str(),
      NodeConfig::ActionEmail { to } => to.as_str(),
      NodeConfig::ActionSlack { channel } => channel.as_str(),
      NodeConfig::ActionSheets { spreadsheet_id } => spreadsheet_id.as_str(),
    }
  }

  /// Set a field by its configuration key.
  pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), BuilderError> {
    let field = self.field();
    if field.key != key {
      return Err(BuilderError::UnknownField {
        kind: self.kind().to_string(),
        field: key.to_string(),
      });
    }
    *self.value_mut() = value.into();
    Ok(())
  }

  /// Key/value view of the configuration.
  pub fn entries(&self) -> Vec<(&'static str, &str)> {
    vec![(self.field().key, self.value())]
  }

  /// One-line summary shown on the canvas, e.g. `channel: #alerts`.
  pub fn summary(&self) -> String {
    format!("{}: {}", self.field().key, self.value())
  }
}
