use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use connect_app::{App, ConnectionStatus, Route};
use connect_client::ApiClient;
use connect_config::ApiConfig;
use connect_runs::{
  ChannelNotifier, DEFAULT_RUN_ID, DEFAULT_TICK, LogReplay, ReplayEvent, RunsView, SAMPLE_LOGS,
};

/// Workflow Connect - workflow automation console
#[derive(Parser)]
#[command(name = "workflow-connect")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Backend base URL (overrides WORKFLOW_CONNECT_API_BASE_URL)
  #[arg(long, global = true)]
  base_url: Option<String>,

  /// Request timeout in milliseconds (overrides WORKFLOW_CONNECT_API_TIMEOUT_MS)
  #[arg(long, global = true)]
  timeout_ms: Option<u64>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Check whether the backend is reachable
  Health,

  /// Stream the demo execution log for a run
  Replay {
    /// Run to replay
    #[arg(long, default_value = DEFAULT_RUN_ID)]
    run: String,

    /// Milliseconds between log records
    #[arg(long)]
    tick_ms: Option<u64>,
  },

  /// Print a page's view model as JSON
  Page {
    /// dashboard, builder, runs, integrations or settings
    route: String,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,workflow_connect=info")),
    )
    .init();

  let cli = Cli::parse();
  let config = load_config(&cli)?;

  match cli.command {
    Some(Commands::Health) => {
      let online = run_async(check_health(config))?;
      if !online {
        std::process::exit(1);
      }
    }
    Some(Commands::Replay { run, tick_ms }) => {
      anyhow::ensure!(tick_ms != Some(0), "--tick-ms must be greater than zero");
      let tick = tick_ms.map(Duration::from_millis).unwrap_or(DEFAULT_TICK);
      run_async(replay(run, tick))?;
    }
    Some(Commands::Page { route }) => {
      run_async(print_page(config, route))?;
    }
    None => {
      println!("workflow-connect - use --help to see available commands");
    }
  }

  Ok(())
}

fn load_config(cli: &Cli) -> Result<ApiConfig> {
  let mut config = ApiConfig::from_env().context("failed to read configuration")?;
  if let Some(base_url) = &cli.base_url {
    config = config.with_base_url(base_url);
  }
  if let Some(ms) = cli.timeout_ms {
    anyhow::ensure!(ms > 0, "--timeout-ms must be greater than zero");
    config = config.with_timeout(Duration::from_millis(ms));
  }
  Ok(config)
}

fn run_async<F: std::future::Future<Output = Result<T>>, T>(future: F) -> Result<T> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(future)
}

async fn check_health(config: ApiConfig) -> Result<bool> {
  let client = ApiClient::new(config.clone()).context("failed to create API client")?;
  let mut app = App::new(config);

  eprintln!("Checking backend at {}", client.config().base_url);

  let online = match app.check_connection(&client).await {
    ConnectionStatus::Online => {
      println!("online");
      true
    }
    ConnectionStatus::Offline { message } => {
      println!("offline ({})", message);
      false
    }
    ConnectionStatus::Checking => {
      println!("checking");
      false
    }
  };

  Ok(online)
}

async fn replay(run_id: String, tick: Duration) -> Result<()> {
  let (tx, mut rx) = mpsc::unbounded_channel();
  let replay = LogReplay::with_sequence(&SAMPLE_LOGS, tick)
    .with_notifier(Arc::new(ChannelNotifier::new(tx)));

  let mut view = RunsView::with_replay(replay);
  view
    .select_run(&run_id)
    .with_context(|| format!("cannot replay run '{}'", run_id))?;

  if let Some(run) = view.active_run() {
    eprintln!("Run {}: {} ({:?})", run.id, run.workflow, run.status);
  }

  loop {
    tokio::select! {
      _ = tokio::signal::ctrl_c() => {
        view.stop();
        eprintln!("Replay cancelled");
        break;
      }
      event = rx.recv() => match event {
        Some(ReplayEvent::RecordEmitted { run_id: id, record, .. }) if id == run_id => {
          println!("{}", record);
        }
        Some(ReplayEvent::Completed { run_id: id, records }) if id == run_id => {
          eprintln!("Replay finished: {} records", records);
          break;
        }
        Some(_) => {}
        None => break,
      }
    }
  }

  Ok(())
}

async fn print_page(config: ApiConfig, route: String) -> Result<()> {
  let mut app = App::new(config);
  app.navigate(Route::parse(&route));

  // Let the runs page show its fully replayed log
  if app.route() == Route::Runs {
    while app.runs().is_some_and(|view| view.streaming()) {
      tokio::time::sleep(DEFAULT_TICK).await;
    }
  }

  let output = serde_json::json!({
    "shell": app.shell(),
    "page": app.page(),
  });
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}
