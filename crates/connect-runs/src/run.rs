use serde::Serialize;

/// Run selected when the runs page opens.
pub const DEFAULT_RUN_ID: &str = "run_demo_1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
  Success,
  Error,
}

/// One past execution of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
  pub id: String,
  pub workflow: String,
  pub status: RunStatus,
}

/// The fixed run history shown in demo mode.
pub fn demo_runs() -> Vec<Run> {
  vec![
    Run {
      id: DEFAULT_RUN_ID.to_string(),
      workflow: "Gmail → Slack: New email alert".to_string(),
      status: RunStatus::Success,
    },
    Run {
      id: "run_demo_2".to_string(),
      workflow: "Webhook → Sheets: Append row".to_string(),
      status: RunStatus::Error,
    },
  ]
}
