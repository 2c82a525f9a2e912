use std::fmt;

use serde::Serialize;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
  #[default]
  Dashboard,
  Builder,
  Runs,
  Integrations,
  Settings,
}

impl Route {
  /// Every route, in sidebar order.
  pub const ALL: [Route; 5] = [
    Route::Dashboard,
    Route::Builder,
    Route::Runs,
    Route::Integrations,
    Route::Settings,
  ];

  /// Parse a route name. Unknown names fall back to the dashboard.
  pub fn parse(value: &str) -> Self {
    Route::ALL
      .into_iter()
      .find(|route| route.as_str() == value.trim())
      .unwrap_or_default()
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Route::Dashboard => "dashboard",
      Route::Builder => "builder",
      Route::Runs => "runs",
      Route::Integrations => "integrations",
      Route::Settings => "settings",
    }
  }

  /// Label of the sidebar entry.
  pub fn nav_label(&self) -> &'static str {
    match self {
      Route::Dashboard => "Dashboard",
      Route::Builder => "Builder",
      Route::Runs => "Runs & Logs",
      Route::Integrations => "Integrations",
      Route::Settings => "Settings",
    }
  }

  /// Title shown in the top bar.
  pub fn title(&self) -> &'static str {
    match self {
      Route::Dashboard => "Dashboard",
      Route::Builder => "Workflow Builder",
      Route::Runs => "Runs & Execution Logs",
      Route::Integrations => "Integrations",
      Route::Settings => "Settings",
    }
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for Route {
  fn from(value: &str) -> Self {
    Route::parse(value)
  }
}
