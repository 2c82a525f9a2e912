//! Timed log replay.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::events::{NoopNotifier, ReplayEvent, ReplayNotifier};
use crate::log::{LogRecord, SAMPLE_LOGS};

/// Interval between two emitted records.
pub const DEFAULT_TICK: Duration = Duration::from_millis(350);

/// Shortest interval a replay will tick at.
pub const MIN_TICK: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayStatus {
  Idle,
  Streaming,
}

/// Displayed state of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySnapshot {
  pub status: ReplayStatus,
  pub records: Vec<LogRecord>,
  /// Incremented on every start; records from older cycles are discarded.
  #[serde(skip)]
  pub generation: u64,
}

impl Default for ReplaySnapshot {
  fn default() -> Self {
    Self {
      status: ReplayStatus::Idle,
      records: Vec::new(),
      generation: 0,
    }
  }
}

/// Handle to the running timer task.
struct ReplayTask {
  run_id: String,
  cancel: CancellationToken,
  handle: JoinHandle<()>,
}

/// Emits a fixed sequence of log records, one per tick, until exhausted.
///
/// The timer task is owned by the replay. Restarting cancels the running
/// task before a new one is spawned, and dropping the replay cancels it too.
pub struct LogReplay {
  sequence: &'static [LogRecord],
  tick: Duration,
  state: Arc<watch::Sender<ReplaySnapshot>>,
  notifier: Arc<dyn ReplayNotifier>,
  task: Option<ReplayTask>,
}

impl Default for LogReplay {
  fn default() -> Self {
    Self::new()
  }
}

impl LogReplay {
  /// Replay of [`SAMPLE_LOGS`] at [`DEFAULT_TICK`].
  pub fn new() -> Self {
    Self::with_sequence(&SAMPLE_LOGS, DEFAULT_TICK)
  }

  /// Replay of `sequence`, one record per `tick`. Ticks shorter than
  /// [`MIN_TICK`] are raised to it.
  pub fn with_sequence(sequence: &'static [LogRecord], tick: Duration) -> Self {
    let (state, _) = watch::channel(ReplaySnapshot::default());
    Self {
      sequence,
      tick: tick.max(MIN_TICK),
      state: Arc::new(state),
      notifier: Arc::new(NoopNotifier),
      task: None,
    }
  }

  pub fn with_notifier(mut self, notifier: Arc<dyn ReplayNotifier>) -> Self {
    self.notifier = notifier;
    self
  }

  pub fn tick(&self) -> Duration {
    self.tick
  }

  /// Start (or restart) streaming from the first record.
  ///
  /// Any running cycle is cancelled and the displayed records are cleared
  /// before the new timer is spawned. Must be called within a Tokio runtime.
  pub fn start(&mut self, run_id: &str) {
    self.cancel_task();

    let generation = self.state.borrow().generation + 1;
    let status = if self.sequence.is_empty() {
      ReplayStatus::Idle
    } else {
      ReplayStatus::Streaming
    };
    self.state.send_replace(ReplaySnapshot {
      status,
      records: Vec::new(),
      generation,
    });

    info!(run_id, generation, records = self.sequence.len(), "log replay started");
    self.notifier.notify(ReplayEvent::Started {
      run_id: run_id.to_string(),
    });

    if self.sequence.is_empty() {
      self.notifier.notify(ReplayEvent::Completed {
        run_id: run_id.to_string(),
        records: 0,
      });
      return;
    }

    let cancel = CancellationToken::new();
    let stream = ReplayStream {
      run_id: run_id.to_string(),
      sequence: self.sequence,
      first_tick: Instant::now() + self.tick,
      tick: self.tick,
      generation,
      state: self.state.clone(),
      notifier: self.notifier.clone(),
      cancel: cancel.clone(),
    };
    let handle = tokio::spawn(stream.run());

    self.task = Some(ReplayTask {
      run_id: run_id.to_string(),
      cancel,
      handle,
    });
  }

  /// Stop streaming, keeping the records emitted so far.
  pub fn stop(&mut self) {
    self.cancel_task();
    self.state.send_if_modified(|snapshot| {
      let changed = snapshot.status != ReplayStatus::Idle;
      snapshot.status = ReplayStatus::Idle;
      changed
    });
  }

  /// Records displayed so far, in sequence order.
  pub fn records(&self) -> Vec<LogRecord> {
    self.state.borrow().records.clone()
  }

  pub fn status(&self) -> ReplayStatus {
    self.state.borrow().status
  }

  pub fn is_streaming(&self) -> bool {
    self.status() == ReplayStatus::Streaming
  }

  /// True while the timer task has not finished.
  pub fn timer_active(&self) -> bool {
    self
      .task
      .as_ref()
      .is_some_and(|task| !task.handle.is_finished())
  }

  pub fn snapshot(&self) -> ReplaySnapshot {
    self.state.borrow().clone()
  }

  /// Watch the displayed state as it changes.
  pub fn subscribe(&self) -> watch::Receiver<ReplaySnapshot> {
    self.state.subscribe()
  }

  fn cancel_task(&mut self) {
    let Some(task) = self.task.take() else {
      return;
    };

    task.cancel.cancel();
    task.handle.abort();

    if self.is_streaming() {
      debug!(run_id = %task.run_id, "log replay cancelled");
      self.notifier.notify(ReplayEvent::Cancelled {
        run_id: task.run_id,
      });
    }
  }
}

impl Drop for LogReplay {
  fn drop(&mut self) {
    self.cancel_task();
  }
}

/// The timer loop for one replay cycle.
struct ReplayStream {
  run_id: String,
  sequence: &'static [LogRecord],
  first_tick: Instant,
  tick: Duration,
  generation: u64,
  state: Arc<watch::Sender<ReplaySnapshot>>,
  notifier: Arc<dyn ReplayNotifier>,
  cancel: CancellationToken,
}

impl ReplayStream {
  async fn run(self) {
    let mut interval = tokio::time::interval_at(self.first_tick, self.tick);
    let last = self.sequence.len() - 1;

    for (index, record) in self.sequence.iter().enumerate() {
      tokio::select! {
        biased;
        _ = self.cancel.cancelled() => return,
        _ = interval.tick() => {}
      }

      let appended = self.state.send_if_modified(|snapshot| {
        if snapshot.generation != self.generation {
          return false;
        }
        snapshot.records.push(*record);
        if index == last {
          snapshot.status = ReplayStatus::Idle;
        }
        true
      });
      if !appended {
        return;
      }

      debug!(run_id = %self.run_id, index, message = record.message, "log record emitted");
      self.notifier.notify(ReplayEvent::RecordEmitted {
        run_id: self.run_id.clone(),
        index,
        record: *record,
      });
    }

    info!(run_id = %self.run_id, records = self.sequence.len(), "log replay completed");
    self.notifier.notify(ReplayEvent::Completed {
      run_id: self.run_id,
      records: self.sequence.len(),
    });
  }
}
