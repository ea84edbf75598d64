use std::cell::RefCell;

use clap::{Parser, Subcommand};
use gate::{
    Clock, FixedClock, GateError, Navigator, Notifier, RedirectConfig, SessionGate, StaticTokenReader, SystemClock,
    TokenStatus,
};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] GateError),
    #[error("transfer failed: {0}")]
    TransferFailed(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gate-cli", about = "Inspect Site A tokens and dry-run the Site B redirect")]
struct Cli {
    /// Cached ID token to evaluate (the value Site A keeps in localStorage).
    #[arg(long, env = "SITE_A_ID_TOKEN", global = true)]
    token: Option<String>,

    /// Evaluate expiry at this instant (Unix epoch ms) instead of now.
    #[arg(long, env = "GATE_NOW_MS", global = true)]
    now_ms: Option<i64>,

    /// Log gate decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode the token and report whether it is still valid.
    Inspect {
        #[arg(long)]
        json: bool,
    },
    /// Print the authorization request URL for the configured client.
    AuthorizeUrl,
    /// Run the Site B transfer and print where a browser would navigate.
    Plan,
}

/// Clock honoring `--now-ms` when given.
#[derive(Debug, Clone, Copy)]
enum CliClock {
    Fixed(FixedClock),
    System(SystemClock),
}

impl CliClock {
    fn from_override(now_ms: Option<i64>) -> Self {
        now_ms.map_or(Self::System(SystemClock), |ms| Self::Fixed(FixedClock(ms)))
    }
}

impl Clock for CliClock {
    fn now_millis(&self) -> i64 {
        match self {
            Self::Fixed(clock) => clock.now_millis(),
            Self::System(clock) => clock.now_millis(),
        }
    }
}

/// Records navigation targets instead of following them.
#[derive(Debug, Default)]
struct DryRunNavigator {
    visited: RefCell<Vec<String>>,
}

impl Navigator for &DryRunNavigator {
    fn navigate(&self, href: &str) -> Result<(), GateError> {
        self.visited.borrow_mut().push(href.to_owned());
        Ok(())
    }
}

/// Records notifications a browser would have shown as alerts.
#[derive(Debug, Default)]
struct CollectingNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notifier for &CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }

    let config = RedirectConfig::from_env()?;
    tracing::debug!(client_id = %config.client_id, token_key = %config.token_key, "redirect configuration loaded");
    let clock = CliClock::from_override(cli.now_ms);
    let tokens = StaticTokenReader(cli.token);

    match cli.command {
        Command::Inspect { json } => run_inspect(config, tokens, clock, json),
        Command::AuthorizeUrl => run_authorize_url(&config),
        Command::Plan => {
            for href in run_plan(config, tokens, clock)? {
                println!("{href}");
            }
            Ok(())
        }
    }
}

fn run_inspect(config: RedirectConfig, tokens: StaticTokenReader, clock: CliClock, as_json: bool) -> Result<(), CliError> {
    let navigator = DryRunNavigator::default();
    let notifier = CollectingNotifier::default();
    let gate = SessionGate::new(config, tokens, &navigator, &notifier, clock);
    let status = gate.inspect();
    tracing::debug!(
        status = status.label(),
        valid = status.is_authenticated(),
        expires_at_ms = ?status.expires_at_ms(),
        "token inspected"
    );
    if as_json {
        println!("{}", serde_json::to_string_pretty(&status_json(&status))?);
    } else {
        println!("{}", status_line(&status));
    }
    Ok(())
}

fn run_authorize_url(config: &RedirectConfig) -> Result<(), CliError> {
    let url = gate::authorize_url(config)?;
    println!("{url}");
    Ok(())
}

/// Run the transfer against dry-run capabilities and return the hrefs a
/// browser would have followed.
fn run_plan(config: RedirectConfig, tokens: StaticTokenReader, clock: CliClock) -> Result<Vec<String>, CliError> {
    let navigator = DryRunNavigator::default();
    let notifier = CollectingNotifier::default();
    let gate = SessionGate::new(config, tokens, &navigator, &notifier, clock);
    gate.initiate_site_b_transfer();

    if let Some(message) = notifier.messages.borrow().first() {
        return Err(CliError::TransferFailed(message.clone()));
    }
    let visited = navigator.visited.take();
    for href in &visited {
        tracing::debug!(href = %href, "transfer planned");
    }
    Ok(visited)
}

fn format_expiry(expires_at_ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(expires_at_ms) * 1_000_000)
        .ok()
        .and_then(|at| at.format(&Rfc3339).ok())
        .unwrap_or_else(|| format!("{expires_at_ms} ms"))
}

fn status_line(status: &TokenStatus) -> String {
    match status {
        TokenStatus::Absent => "absent: no token supplied".to_owned(),
        TokenStatus::Malformed(e) => format!("malformed: {e}"),
        TokenStatus::Expired { expires_at_ms } => format!("expired: at {}", format_expiry(*expires_at_ms)),
        TokenStatus::Valid { expires_at_ms } => format!("valid: until {}", format_expiry(*expires_at_ms)),
    }
}

fn status_json(status: &TokenStatus) -> Value {
    let error = match status {
        TokenStatus::Malformed(e) => Some(e.to_string()),
        _ => None,
    };
    json!({
        "status": status.label(),
        "authenticated": status.is_authenticated(),
        "expires_at_ms": status.expires_at_ms(),
        "expires_at": status.expires_at_ms().map(format_expiry),
        "error": error,
    })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
