//! Page view models and the demo content they show.

use connect_config::BASE_URL_VAR;
use connect_runs::RunsSnapshot;
use connect_workflow::{Builder, FieldSpec, NodeKind};
use serde::Serialize;

/// Badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
  Neutral,
  Success,
  Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
  Active,
  Paused,
}

/// A row of the dashboard's recent workflows table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSummary {
  pub id: &'static str,
  pub name: &'static str,
  pub status: WorkflowStatus,
  pub last_run: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
  pub label: &'static str,
  pub value: &'static str,
  pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Integration {
  pub id: &'static str,
  pub name: &'static str,
  pub status: &'static str,
}

pub fn demo_workflows() -> Vec<WorkflowSummary> {
  vec![
    WorkflowSummary {
      id: "wf_1",
      name: "Gmail → Slack: New email alert",
      status: WorkflowStatus::Active,
      last_run: "2m ago",
    },
    WorkflowSummary {
      id: "wf_2",
      name: "Webhook → Google Sheets: Append row",
      status: WorkflowStatus::Paused,
      last_run: "yesterday",
    },
    WorkflowSummary {
      id: "wf_3",
      name: "Schedule → Slack: Standup reminder",
      status: WorkflowStatus::Active,
      last_run: "today",
    },
  ]
}

pub fn demo_metrics() -> Vec<Metric> {
  vec![
    Metric {
      label: "Workflows",
      value: "3",
      tone: Tone::Neutral,
    },
    Metric {
      label: "Runs today",
      value: "12",
      tone: Tone::Neutral,
    },
    Metric {
      label: "Errors",
      value: "1",
      tone: Tone::Danger,
    },
    Metric {
      label: "Integrations",
      value: "3",
      tone: Tone::Neutral,
    },
  ]
}

pub fn demo_integrations() -> Vec<Integration> {
  [
    ("slack", "Slack"),
    ("gmail", "Email (SMTP/Gmail)"),
    ("sheets", "Google Sheets"),
  ]
  .into_iter()
  .map(|(id, name)| Integration {
    id,
    name,
    status: "not connected",
  })
  .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
  pub workflows: Vec<WorkflowSummary>,
  pub metrics: Vec<Metric>,
}

impl DashboardView {
  pub fn demo() -> Self {
    Self {
      workflows: demo_workflows(),
      metrics: demo_metrics(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationsView {
  pub integrations: Vec<Integration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
  /// Name of the variable that configures the base URL.
  pub env_var: &'static str,
  pub api_base_url: String,
}

impl SettingsView {
  pub fn new(api_base_url: &str) -> Self {
    Self {
      env_var: BASE_URL_VAR,
      api_base_url: api_base_url.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
  pub kind: NodeKind,
  pub label: &'static str,
}

/// A node as drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasNode {
  pub id: String,
  pub kind: NodeKind,
  pub label: &'static str,
  pub x: i32,
  pub y: i32,
  pub summary: String,
  pub active: bool,
}

/// The inspector panel for the selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectorView {
  pub id: String,
  pub kind: NodeKind,
  pub field: FieldSpec,
  pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderView {
  pub name: String,
  pub catalog: Vec<CatalogEntry>,
  pub new_node_kind: NodeKind,
  pub nodes: Vec<CanvasNode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inspector: Option<InspectorView>,
  pub can_test_run: bool,
}

impl BuilderView {
  pub fn new(builder: &Builder) -> Self {
    let selected = builder.selected_id();

    let nodes = builder
      .nodes()
      .iter()
      .map(|node| CanvasNode {
        id: node.id.clone(),
        kind: node.kind(),
        label: node.label(),
        x: node.position.x,
        y: node.position.y,
        summary: node.config.summary(),
        active: selected == Some(node.id.as_str()),
      })
      .collect();

    let inspector = builder.selected_node().map(|node| InspectorView {
      id: node.id.clone(),
      kind: node.kind(),
      field: node.config.field(),
      value: node.config.value().to_string(),
    });

    Self {
      name: builder.name().to_string(),
      catalog: NodeKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
          kind,
          label: kind.label(),
        })
        .collect(),
      new_node_kind: builder.new_node_kind(),
      nodes,
      inspector,
      can_test_run: !builder.nodes().is_empty(),
    }
  }
}

/// View model of the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
  Dashboard(DashboardView),
  Builder(BuilderView),
  Runs(RunsSnapshot),
  Integrations(IntegrationsView),
  Settings(SettingsView),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dashboard_demo_content() {
    let view = DashboardView::demo();
    assert_eq!(view.workflows.len(), 3);
    assert_eq!(view.workflows[1].status, WorkflowStatus::Paused);
    assert_eq!(view.metrics[2].tone, Tone::Danger);
  }

  #[test]
  fn test_integrations_not_connected() {
    let integrations = demo_integrations();
    assert_eq!(integrations.len(), 3);
    assert!(integrations.iter().all(|i| i.status == "not connected"));
  }

  #[test]
  fn test_builder_view_inspector_follows_selection() {
    let mut builder = Builder::default();
    assert!(BuilderView::new(&builder).inspector.is_none());

    let id = builder.add_node(NodeKind::TriggerSchedule);
    let view = BuilderView::new(&builder);

    let inspector = view.inspector.unwrap();
    assert_eq!(inspector.id, id);
    assert_eq!(inspector.field.label, "CRON");
    assert_eq!(inspector.value, "0 9 * * 1-5");

    let active: Vec<&str> = view
      .nodes
      .iter()
      .filter(|n| n.active)
      .map(|n| n.id.as_str())
      .collect();
    assert_eq!(active, vec![id.as_str()]);
    assert_eq!(view.catalog.len(), 5);
    assert!(view.can_test_run);
  }

  #[test]
  fn test_page_view_tagged() {
    let value = serde_json::to_value(PageView::Settings(SettingsView::new(
      "http://localhost:3001",
    )))
    .unwrap();

    assert_eq!(value["page"], "settings");
    assert_eq!(value["api_base_url"], "http://localhost:3001");
    assert_eq!(value["env_var"], "WORKFLOW_CONNECT_API_BASE_URL");
  }
}
