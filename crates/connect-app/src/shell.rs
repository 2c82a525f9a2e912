use serde::Serialize;

use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }

  /// Label of the button that switches away from this theme.
  pub fn toggle_label(self) -> &'static str {
    match self {
      Theme::Light => "Dark mode",
      Theme::Dark => "Light mode",
    }
  }
}

/// Reachability of the backend, as last determined by a health check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionStatus {
  #[default]
  Checking,
  Online,
  /// Advisory only; the rest of the console keeps working in demo mode.
  Offline { message: String },
}

impl ConnectionStatus {
  pub fn label(&self) -> &'static str {
    match self {
      ConnectionStatus::Checking => "checking",
      ConnectionStatus::Online => "online",
      ConnectionStatus::Offline { .. } => "offline",
    }
  }

  pub fn is_online(&self) -> bool {
    matches!(self, ConnectionStatus::Online)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
  pub route: Route,
  pub label: &'static str,
  pub active: bool,
}

/// The frame around every page: sidebar, top bar and offline banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
  pub brand: &'static str,
  pub tagline: &'static str,
  pub nav: Vec<NavItem>,
  pub title: &'static str,
  pub backend_status: &'static str,
  pub theme: Theme,
  pub theme_toggle_label: &'static str,
  pub user: &'static str,
  /// Present while the backend is offline.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offline_banner: Option<String>,
}

impl ShellView {
  pub(crate) fn new(route: Route, theme: Theme, connection: &ConnectionStatus) -> Self {
    let nav = Route::ALL
      .into_iter()
      .map(|r| NavItem {
        route: r,
        label: r.nav_label(),
        active: r == route,
      })
      .collect();

    let offline_banner = match connection {
      ConnectionStatus::Offline { message } => Some(format!("Backend offline. ({})", message)),
      _ => None,
    };

    Self {
      brand: "Workflow Connect",
      tagline: "retro automation",
      nav,
      title: route.title(),
      backend_status: connection.label(),
      theme,
      theme_toggle_label: theme.toggle_label(),
      user: "Demo User",
      offline_banner,
    }
  }
}
