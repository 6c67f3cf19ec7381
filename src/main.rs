//! Command-line entry point.
//!
//! This module is the thin runtime around the library: it parses arguments,
//! loads configuration, owns the event loop and executes the actions the event
//! handler returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Main thread                             │
//! │  ┌────────────────────┐                  │
//! │  │ AppState + loop    │ ◀── Event ───┐   │
//! │  └────────────────────┘              │   │
//! │     │ PostToWorker                   │   │
//! │     ▼                                │   │
//! │  ┌────────────────────┐              │   │
//! │  │ Upload worker      │ ── response ─┤   │
//! │  └────────────────────┘              │   │
//! │  ┌────────────────────┐              │   │
//! │  │ stdin reader       │ ── command ──┘   │
//! │  └────────────────────┘                  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Modes
//!
//! - `pdf-audit FILE`: validate once, print the results, exit with
//!   0 (PASS), 1 (any other status) or 2 (selection or submission failure)
//! - `pdf-audit`: interactive prompt
//!
//! # Commands
//!
//! - `open <path>`: choose a file
//! - `validate` / `v`: submit the current file
//! - `clear`: hide the results
//! - `help`: toggle the command reference
//! - `quit` / `q`: exit
//! - empty line: dismiss an alert

#![allow(clippy::multiple_crate_versions)]

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, Sender};

use clap::Parser;

use pdf_audit::app::ValidationOutcome;
use pdf_audit::infrastructure::expand_tilde;
use pdf_audit::transport::HttpTransport;
use pdf_audit::ui::{self, ColorMode};
use pdf_audit::worker::{UploadWorker, WorkerHandle, WorkerResponse};
use pdf_audit::{handle_event, Action, AppState, Config, Event, SubmissionStatus, ValidationMode};

const EXIT_PASS: u8 = 0;
const EXIT_NOT_PASS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

const DEFAULT_COLUMNS: usize = 80;

/// Submit a document to the audit service and render its verdict.
#[derive(Debug, Parser)]
#[command(name = "pdf-audit", version, about = "Submit a document to the audit service and render its verdict")]
struct Cli {
    /// Document to validate. Omit to start the interactive prompt.
    file: Option<PathBuf>,

    /// Config file (default: <config_dir>/pdf-audit/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Audit service base URL, e.g. http://127.0.0.1:8000
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Endpoint path (default depends on the mode)
    #[arg(long, value_name = "PATH")]
    endpoint: Option<String>,

    /// Use the issue-summary endpoint instead of the full report
    #[arg(long)]
    summary: bool,

    /// Built-in theme name
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, value_name = "PATH")]
    theme_file: Option<String>,

    /// Disable colors
    #[arg(long)]
    plain: bool,

    /// Tracing filter (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    /// Applies flags on top of the file configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server_url.clone_from(server);
        }
        if self.summary {
            config.mode = ValidationMode::Summary;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint_path = Some(endpoint.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = Some(theme.clone());
            config.theme_file = None;
        }
        if let Some(theme_file) = &self.theme_file {
            config.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = Some(timeout);
        }
    }

    fn color_mode(&self) -> ColorMode {
        if self.plain || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
            ColorMode::Plain
        } else {
            ColorMode::Ansi
        }
    }
}

/// Event loop state owned by the main thread.
struct Runtime {
    state: AppState,
    worker: WorkerHandle,
    sender: Sender<Event>,
    events: Receiver<Event>,
    color: ColorMode,
    cols: usize,
}

impl Runtime {
    fn start(config: &Config, color: ColorMode) -> pdf_audit::Result<Self> {
        let (sender, events) = mpsc::channel();
        let transport = HttpTransport::new(config.request_timeout())?;

        let worker_sender = sender.clone();
        let worker = UploadWorker::new(Box::new(transport)).spawn(move |response| {
            let _ = worker_sender.send(Event::WorkerResponse(response));
        })?;

        Ok(Self {
            state: pdf_audit::initialize(config),
            worker,
            sender,
            events,
            color,
            cols: terminal_columns(),
        })
    }

    /// Handles one event and executes its actions. Returns `(render, keep_running)`.
    fn dispatch(&mut self, event: &Event) -> (bool, bool) {
        let (render, actions) = match handle_event(&mut self.state, event) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                return (false, true);
            }
        };

        let mut keep_running = true;
        for action in actions {
            keep_running &= self.execute_action(action);
        }
        (render, keep_running)
    }

    fn execute_action(&self, action: Action) -> bool {
        match action {
            Action::PostToWorker(message) => {
                let document = message.document().clone();
                if let Err(e) = self.worker.post(message) {
                    tracing::error!(error = %e, "failed to post to upload worker");
                    let _ = self.sender.send(Event::WorkerResponse(WorkerResponse::SubmissionFailed {
                        document,
                        message: e.to_string(),
                    }));
                }
                true
            }
            Action::Quit => false,
        }
    }

    /// Validates `path` once and prints the results.
    fn run_once(mut self, path: PathBuf) -> ExitCode {
        let _span = tracing::info_span!("validate_once", file = %path.display()).entered();

        self.dispatch(&Event::OpenFile(path));
        if self.state.alert.is_none() {
            self.dispatch(&Event::Submit);
            while self.state.submission == SubmissionStatus::Submitting {
                let Ok(event) = self.events.recv() else {
                    break;
                };
                self.dispatch(&event);
            }
        }

        let output = ui::render_results(&self.state, self.color, self.cols);
        let code = if self.state.alert.is_some() {
            eprint!("{output}");
            EXIT_FAILURE
        } else {
            print!("{output}");
            match &self.state.outcome {
                Some(ValidationOutcome::Report { report, .. }) if report.overall_status.is_pass() => EXIT_PASS,
                Some(ValidationOutcome::Summary { summary, .. }) if summary.overall_status.is_pass() => EXIT_PASS,
                Some(_) => EXIT_NOT_PASS,
                None => EXIT_FAILURE,
            }
        };

        self.worker.shutdown();
        ExitCode::from(code)
    }

    /// Runs the interactive prompt until `quit` or end of input.
    fn run_interactive(mut self) -> ExitCode {
        let _span = tracing::info_span!("interactive").entered();

        if let Err(e) = spawn_stdin_reader(self.sender.clone()) {
            eprintln!("pdf-audit: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }

        self.draw();
        while let Ok(event) = self.events.recv() {
            let (render, keep_running) = self.dispatch(&event);
            if !keep_running {
                break;
            }
            if render {
                self.draw();
            }
        }

        self.worker.shutdown();
        ExitCode::from(EXIT_PASS)
    }

    fn draw(&self) {
        let screen = ui::render(&self.state, self.color, self.cols);
        let mut stdout = std::io::stdout().lock();
        let clear = if self.color == ColorMode::Ansi { ui::CLEAR_SCREEN } else { "" };
        if let Err(e) = write_screen(&mut stdout, clear, &screen) {
            tracing::debug!(error = %e, "failed to write screen");
        }
    }
}

/// Writes one frame followed by the prompt.
fn write_screen<W: Write>(out: &mut W, clear: &str, screen: &str) -> std::io::Result<()> {
    write!(out, "{clear}{screen}> ")?;
    out.flush()
}

/// Maps one line of input to an event.
fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim();
    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command {
        "" => Some(Event::DismissAlert),
        "open" | "o" if !argument.is_empty() => Some(Event::OpenFile(expand_tilde(argument))),
        "validate" | "v" => Some(Event::Submit),
        "clear" => Some(Event::ClearResults),
        "help" | "?" => Some(Event::ToggleHelp),
        "quit" | "q" | "exit" => Some(Event::Quit),
        _ => None,
    }
}

fn spawn_stdin_reader(sender: Sender<Event>) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name("pdf-audit-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                match parse_command(&line) {
                    Some(event) => {
                        if sender.send(event).is_err() {
                            return;
                        }
                    }
                    None => tracing::debug!(input = %line, "unrecognized command"),
                }
            }
            let _ = sender.send(Event::Quit);
        })?;
    Ok(())
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_COLUMNS)
        .clamp(40, 160)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pdf-audit: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    cli.apply(&mut config);

    pdf_audit::observability::init_tracing(&config);
    tracing::info!(endpoint = %config.endpoint_url(), mode = ?config.mode, "pdf-audit starting");

    let runtime = match Runtime::start(&config, cli.color_mode()) {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("pdf-audit: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match cli.file {
        Some(path) => runtime.run_once(path),
        None => runtime.run_interactive(),
    }
}
