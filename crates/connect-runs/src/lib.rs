//! Connect Runs
//!
//! Demo run history and the log replay that backs the "Runs & Logs" page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         RunsView                            │
//! │  - demo runs, selected run                                  │
//! │  - select_run / replay_logs restart the replay              │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         LogReplay                           │
//! │  - Idle → Streaming → Idle                                  │
//! │  - one record per tick, in order, then stops                │
//! │  - owns the timer task; cancels it on restart/stop/drop     │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              watch::Receiver<ReplaySnapshot>                │
//! │              ReplayNotifier (ReplayEvent)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Starting a replay spawns a task on the current Tokio runtime.

mod error;
mod events;
mod log;
mod replay;
mod run;
mod view;

pub use error::RunsError;
pub use events::{ChannelNotifier, NoopNotifier, ReplayEvent, ReplayNotifier};
pub use log::{LogLevel, LogRecord, SAMPLE_LOGS};
pub use replay::{DEFAULT_TICK, LogReplay, MIN_TICK, ReplaySnapshot, ReplayStatus};
pub use run::{DEFAULT_RUN_ID, Run, RunStatus, demo_runs};
pub use view::{RunsSnapshot, RunsView};
