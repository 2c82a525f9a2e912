//! Connect App
//!
//! The application controller for Workflow Connect. [`App`] owns every piece
//! of UI state explicitly: the current page (and the state that lives only
//! while that page is shown), the theme, and the backend connection status.
//! Front-ends render the view models it produces ([`ShellView`],
//! [`PageView`]) and forward user actions back to it.
//!
//! Page state follows the page: the builder session and the log replay are
//! created when their page is entered and dropped when it is left, which
//! also cancels any replay timer still running.

mod app;
mod error;
mod pages;
mod route;
mod shell;

pub use app::App;
pub use error::AppError;
pub use pages::{
  BuilderView, CanvasNode, CatalogEntry, DashboardView, InspectorView, Integration,
  IntegrationsView, Metric, PageView, SettingsView, Tone, WorkflowStatus, WorkflowSummary,
  demo_integrations, demo_metrics, demo_workflows,
};
pub use route::Route;
pub use shell::{ConnectionStatus, NavItem, ShellView, Theme};
