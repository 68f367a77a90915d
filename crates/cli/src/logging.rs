use std::io::IsTerminal;

use itertools::Itertools;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

use polybft_config::{LogFormat, LogLevel};

/// Crates whose logs are shown by a bare level such as `debug`.
const OWN_CRATES: &[&str] = &["polybft_cli", "polybft_core_proposer"];

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
/// Keep the returned guard alive until exit, dropping it flushes pending logs.
pub fn init(log_level: LogLevel, log_format: LogFormat) -> Result<WorkerGuard, ParseError> {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    let filter = build_filter(&directives)?;

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    match log_format {
        LogFormat::Plaintext => builder.finish().init(),
        LogFormat::Json => builder.json().finish().init(),
    }

    Ok(guard)
}

/// `level` for each of our own crates.
fn own_crates_directive(level: &str) -> String {
    OWN_CRATES.iter().map(|c| format!("{c}={level}")).join(",")
}

/// Parse comma-separated directives. A directive without a target
/// only applies to our own crates, leaving dependencies quiet.
fn build_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    directives
        .split(',')
        .filter(|d| !d.is_empty())
        .flat_map(|d| {
            if d.contains('=') {
                vec![d.to_string()]
            } else {
                own_crates_directive(d).split(',').map(String::from).collect()
            }
        })
        .try_fold(EnvFilter::default(), |filter, d| {
            Ok(filter.add_directive(d.parse()?))
        })
}
