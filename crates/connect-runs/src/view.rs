use serde::Serialize;

use crate::error::RunsError;
use crate::log::LogRecord;
use crate::replay::{LogReplay, ReplayStatus};
use crate::run::{DEFAULT_RUN_ID, Run, demo_runs};

/// State of the "Runs & Logs" page.
///
/// Opening the page starts a replay for the default run. Dropping the view
/// cancels any replay in progress.
pub struct RunsView {
  runs: Vec<Run>,
  selected_run: String,
  replay: LogReplay,
}

/// Serializable picture of the runs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunsSnapshot {
  pub runs: Vec<Run>,
  pub selected_run: String,
  pub active_run: Option<Run>,
  pub status: ReplayStatus,
  pub logs: Vec<LogRecord>,
}

impl RunsView {
  /// Open the page with the default replay. Must be called within a Tokio
  /// runtime.
  pub fn new() -> Self {
    Self::with_replay(LogReplay::new())
  }

  /// Open the page using the given replay.
  pub fn with_replay(replay: LogReplay) -> Self {
    let mut view = Self {
      runs: demo_runs(),
      selected_run: DEFAULT_RUN_ID.to_string(),
      replay,
    };
    view.replay.start(&view.selected_run);
    view
  }

  pub fn runs(&self) -> &[Run] {
    &self.runs
  }

  pub fn selected_run(&self) -> &str {
    &self.selected_run
  }

  pub fn active_run(&self) -> Option<&Run> {
    self.runs.iter().find(|r| r.id == self.selected_run)
  }

  /// Select a run. Choosing a different run restarts the replay; choosing
  /// the current one leaves the stream alone.
  pub fn select_run(&mut self, run_id: &str) -> Result<(), RunsError> {
    if !self.runs.iter().any(|r| r.id == run_id) {
      return Err(RunsError::RunNotFound(run_id.to_string()));
    }
    if self.selected_run != run_id {
      self.selected_run = run_id.to_string();
      self.replay.start(run_id);
    }
    Ok(())
  }

  /// Clear the log and stream it again from the first record.
  pub fn replay_logs(&mut self) {
    self.replay.start(&self.selected_run);
  }

  /// Stop the replay, keeping the records shown so far.
  pub fn stop(&mut self) {
    self.replay.stop();
  }

  pub fn streaming(&self) -> bool {
    self.replay.is_streaming()
  }

  pub fn logs(&self) -> Vec<LogRecord> {
    self.replay.records()
  }

  pub fn replay(&self) -> &LogReplay {
    &self.replay
  }

  pub fn snapshot(&self) -> RunsSnapshot {
    let replay = self.replay.snapshot();
    RunsSnapshot {
      runs: self.runs.clone(),
      selected_run: self.selected_run.clone(),
      active_run: self.active_run().cloned(),
      status: replay.status,
      logs: replay.records,
    }
  }
}
