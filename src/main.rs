//! Netcheck: report whether IPv6 and IPv4 connectivity works, then exit after a countdown.

mod config;
mod locale;
mod probe;
mod report;
#[cfg(test)]
mod testutil;

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use clap::Parser;
use config::CheckConfig;
use locale::Language;
use probe::ProbeResult;
use tokio::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "netcheck",
    about = "Check IPv6 and IPv4 connectivity",
    long_about = "Requests one IPv6-only and one IPv4-only endpoint and reports whether each answered 200 within the timeout, with the response time. Always exits successfully after a short countdown."
)]
struct Cli {
    /// Endpoint reachable only over IPv6
    #[arg(long, default_value = config::DEFAULT_IPV6_URL)]
    pub ipv6_url: String,

    /// Endpoint reachable only over IPv4
    #[arg(long, default_value = config::DEFAULT_IPV4_URL)]
    pub ipv4_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Seconds to count down before exiting
    #[arg(long, default_value_t = config::DEFAULT_COUNTDOWN_SECS)]
    pub countdown: u64,
}

impl Cli {
    fn check_config(&self) -> CheckConfig {
        CheckConfig {
            ipv6_url: self.ipv6_url.clone(),
            ipv4_url: self.ipv4_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            countdown: self.countdown,
        }
    }
}

type ProbeFuture = Pin<Box<dyn Future<Output = ProbeResult> + Send>>;

/// Console output is best effort: a failed write is logged and the run goes on.
fn emit(written: std::io::Result<()>) {
    if let Err(e) = written {
        tracing::warn!("Failed to write report: {}", e);
    }
}

/// Probe IPv6 then IPv4, print both results in that order, then count down.
/// Always runs to the end of the countdown.
async fn run<W: Write>(
    config: &CheckConfig,
    lang: Language,
    out: &mut W,
    probe_url: impl Fn(String) -> ProbeFuture,
) {
    let m = lang.messages();
    let color = report::use_color();

    emit(report::header(out, m));
    for (label, url) in [(m.ipv6, &config.ipv6_url), (m.ipv4, &config.ipv4_url)] {
        emit(report::checking_line(out, label, m));
        let result = probe_url(url.clone()).await;
        tracing::debug!("{} check: {:?}", label, result);
        emit(report::result_line(out, label, &result, m, color));
    }
    emit(report::footer(out));

    emit(report::countdown(out, config.countdown, m).await);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.check_config();
    let lang = Language::detect();
    tracing::debug!("Config: {:?}, language: {:?}", config, lang);

    let timeout = config.timeout;
    let mut stdout = std::io::stdout();
    run(&config, lang, &mut stdout, move |url| {
        Box::pin(async move { probe::probe(&url, timeout).await })
    })
    .await;
    Ok(())
}
