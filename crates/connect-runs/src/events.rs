//! Replay events and notifiers.
//!
//! Events are emitted while a log replay runs so consumers can mirror the
//! stream elsewhere (print it, forward it to a UI, record it in tests).

use serde::Serialize;
use tokio::sync::mpsc;

use crate::log::LogRecord;

/// Events emitted by a log replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReplayEvent {
  /// A replay cycle started with an empty log.
  Started { run_id: String },

  /// A record was appended to the displayed log.
  RecordEmitted {
    run_id: String,
    index: usize,
    record: LogRecord,
  },

  /// Every record was emitted and the timer stopped.
  Completed { run_id: String, records: usize },

  /// The cycle was cut short by a restart, stop, or drop.
  Cancelled { run_id: String },
}

/// Trait for receiving replay events.
pub trait ReplayNotifier: Send + Sync {
  fn notify(&self, event: ReplayEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl ReplayNotifier for NoopNotifier {
  fn notify(&self, _event: ReplayEvent) {}
}

/// A notifier that forwards events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<ReplayEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<ReplayEvent>) -> Self {
    Self { sender }
  }
}

impl ReplayNotifier for ChannelNotifier {
  fn notify(&self, event: ReplayEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
