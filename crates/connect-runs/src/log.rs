use std::fmt;

use serde::Serialize;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
  Info,
  Success,
  Error,
}

impl LogLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Info => "info",
      LogLevel::Success => "success",
      LogLevel::Error => "error",
    }
  }
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single line of execution log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord {
  /// Offset from run start, e.g. `00:00.212`.
  pub timestamp: &'static str,
  pub level: LogLevel,
  pub message: &'static str,
}

impl fmt::Display for LogRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {:<7} {}",
      self.timestamp,
      self.level.as_str().to_uppercase(),
      self.message
    )
  }
}

/// The log replayed for every demo run.
pub const SAMPLE_LOGS: [LogRecord; 5] = [
  LogRecord {
    timestamp: "00:00.000",
    level: LogLevel::Info,
    message: "Run started",
  },
  LogRecord {
    timestamp: "00:00.212",
    level: LogLevel::Info,
    message: "Trigger: webhook payload received",
  },
  LogRecord {
    timestamp: "00:00.560",
    level: LogLevel::Info,
    message: "Action: Slack message prepared",
  },
  LogRecord {
    timestamp: "00:00.890",
    level: LogLevel::Info,
    message: "Action: Slack message sent (200 OK)",
  },
  LogRecord {
    timestamp: "00:01.020",
    level: LogLevel::Success,
    message: "Run completed",
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(SAMPLE_LOGS[0].to_string(), "00:00.000 INFO    Run started");
    assert_eq!(SAMPLE_LOGS[4].to_string(), "00:01.020 SUCCESS Run completed");
  }

  #[test]
  fn test_serialize() {
    let value = serde_json::to_value(SAMPLE_LOGS[4]).unwrap();
    assert_eq!(
      value,
      serde_json::json!({"timestamp": "00:01.020", "level": "success", "message": "Run completed"})
    );
  }
}
