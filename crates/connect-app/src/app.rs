//! Top-level application controller.

use connect_client::{ApiClient, ApiError};
use connect_config::ApiConfig;
use connect_runs::RunsView;
use connect_workflow::Builder;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::pages::{
  BuilderView, DashboardView, IntegrationsView, PageView, SettingsView, demo_integrations,
};
use crate::route::Route;
use crate::shell::{ConnectionStatus, ShellView, Theme};

/// Shown when a failed health check carries no message.
const UNREACHABLE_MESSAGE: &str = "Backend not reachable";

/// The page on screen together with the state that lives only while it is
/// shown.
enum ActivePage {
  Dashboard,
  Builder(Builder),
  Runs(RunsView),
  Integrations,
  Settings,
}

impl ActivePage {
  fn route(&self) -> Route {
    match self {
      ActivePage::Dashboard => Route::Dashboard,
      ActivePage::Builder(_) => Route::Builder,
      ActivePage::Runs(_) => Route::Runs,
      ActivePage::Integrations => Route::Integrations,
      ActivePage::Settings => Route::Settings,
    }
  }

  fn open(route: Route) -> Self {
    match route {
      Route::Dashboard => ActivePage::Dashboard,
      Route::Builder => ActivePage::Builder(Builder::default()),
      Route::Runs => ActivePage::Runs(RunsView::new()),
      Route::Integrations => ActivePage::Integrations,
      Route::Settings => ActivePage::Settings,
    }
  }
}

/// Owns all console state and applies user actions to it.
pub struct App {
  config: ApiConfig,
  page: ActivePage,
  theme: Theme,
  connection: ConnectionStatus,
  shutdown: CancellationToken,
}

impl App {
  /// Create the console on the dashboard with a pending connection check.
  pub fn new(config: ApiConfig) -> Self {
    Self {
      config,
      page: ActivePage::Dashboard,
      theme: Theme::default(),
      connection: ConnectionStatus::default(),
      shutdown: CancellationToken::new(),
    }
  }

  pub fn config(&self) -> &ApiConfig {
    &self.config
  }

  pub fn route(&self) -> Route {
    self.page.route()
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn toggle_theme(&mut self) -> Theme {
    self.theme = self.theme.toggled();
    self.theme
  }

  pub fn connection(&self) -> &ConnectionStatus {
    &self.connection
  }

  /// Switch pages.
  ///
  /// Navigating to the page already shown keeps its state. Leaving a page
  /// drops its state; leaving the runs page cancels its log replay. Entering
  /// the runs page must happen within a Tokio runtime.
  pub fn navigate(&mut self, route: Route) {
    if self.route() == route {
      return;
    }
    debug!(from = %self.route(), to = %route, "navigate");
    self.page = ActivePage::open(route);
  }

  /// Navigate by route name; unknown names go to the dashboard.
  pub fn navigate_to(&mut self, name: &str) {
    self.navigate(Route::parse(name));
  }

  /// Dashboard "+ New workflow".
  pub fn create_workflow(&mut self) {
    self.navigate(Route::Builder);
  }

  pub fn builder(&self) -> Option<&Builder> {
    match &self.page {
      ActivePage::Builder(builder) => Some(builder),
      _ => None,
    }
  }

  pub fn builder_mut(&mut self) -> Option<&mut Builder> {
    match &mut self.page {
      ActivePage::Builder(builder) => Some(builder),
      _ => None,
    }
  }

  pub fn runs(&self) -> Option<&RunsView> {
    match &self.page {
      ActivePage::Runs(view) => Some(view),
      _ => None,
    }
  }

  pub fn runs_mut(&mut self) -> Option<&mut RunsView> {
    match &mut self.page {
      ActivePage::Runs(view) => Some(view),
      _ => None,
    }
  }

  /// Builder "Test run": validate the workflow and open the runs page.
  pub fn test_run(&mut self) -> Result<(), AppError> {
    let current = self.route();
    let builder = self.builder().ok_or(AppError::WrongPage {
      expected: Route::Builder,
      current,
    })?;
    builder.test_run()?;
    self.navigate(Route::Runs);
    Ok(())
  }

  /// Runs "Replay logs".
  pub fn replay_logs(&mut self) -> Result<(), AppError> {
    let current = self.route();
    let view = self.runs_mut().ok_or(AppError::WrongPage {
      expected: Route::Runs,
      current,
    })?;
    view.replay_logs();
    Ok(())
  }

  /// Runs list click: select a run, restarting the log when it changes.
  pub fn select_run(&mut self, run_id: &str) -> Result<(), AppError> {
    let current = self.route();
    let view = self.runs_mut().ok_or(AppError::WrongPage {
      expected: Route::Runs,
      current,
    })?;
    view.select_run(run_id)?;
    Ok(())
  }

  /// Check backend reachability and update the connection status.
  ///
  /// The check is aborted when the token from [`App::shutdown_token`] is
  /// cancelled, or immediately if [`App::shutdown`] already ran. An aborted
  /// check restores the status it started from.
  pub async fn check_connection(&mut self, client: &ApiClient) -> &ConnectionStatus {
    let previous = std::mem::replace(&mut self.connection, ConnectionStatus::Checking);
    let cancel = self.shutdown.child_token();

    match client.check_health_with_cancel(&cancel).await {
      Ok(_) => {
        info!(base_url = %client.config().base_url, "backend online");
        self.connection = ConnectionStatus::Online;
      }
      Err(ApiError::Cancelled) => {
        debug!("connection check aborted");
        self.connection = previous;
      }
      Err(e) => {
        warn!(base_url = %client.config().base_url, error = %e, "backend offline");
        let message = e.to_string();
        let message = if message.is_empty() {
          UNREACHABLE_MESSAGE.to_string()
        } else {
          message
        };
        self.connection = ConnectionStatus::Offline { message };
      }
    }

    &self.connection
  }

  /// Token cancelled by [`App::shutdown`], for work started on the app's
  /// behalf elsewhere.
  pub fn shutdown_token(&self) -> CancellationToken {
    self.shutdown.clone()
  }

  /// Abort in-flight requests and stop page timers.
  pub fn shutdown(&mut self) {
    self.shutdown.cancel();
    if let ActivePage::Runs(view) = &mut self.page {
      view.stop();
    }
  }

  pub fn shell(&self) -> ShellView {
    ShellView::new(self.route(), self.theme, &self.connection)
  }

  /// View model of the current page.
  pub fn page(&self) -> PageView {
    match &self.page {
      ActivePage::Dashboard => PageView::Dashboard(DashboardView::demo()),
      ActivePage::Builder(builder) => PageView::Builder(BuilderView::new(builder)),
      ActivePage::Runs(view) => PageView::Runs(view.snapshot()),
      ActivePage::Integrations => PageView::Integrations(IntegrationsView {
        integrations: demo_integrations(),
      }),
      ActivePage::Settings => PageView::Settings(SettingsView::new(&self.config.base_url)),
    }
  }
}
