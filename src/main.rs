use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use bridge_api::Client;
use huectl::args::Args;
use huectl::config::{self, Overrides};
use huectl::error::{ApiResult, exit_code};
use huectl::resolve;

/*
 * Formatter function to output in syslog format. This makes sense when running
 * from a systemd unit or timer (where output goes to the system journal)
 */
#[allow(clippy::match_same_arms)]
fn syslog_format(
    buf: &mut pretty_env_logger::env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "<{}>{}: {}",
        match record.level() {
            log::Level::Error => 3,
            log::Level::Warn => 4,
            log::Level::Info => 6,
            log::Level::Debug => 7,
            log::Level::Trace => 7,
        },
        record.target(),
        record.args()
    )
}

fn init_logging() -> ApiResult<()> {
    /* Try to provide reasonable default filters, when RUST_LOG is not specified */
    const DEFAULT_LOG_FILTERS: &[&str] = &["warn", "huectl=info"];

    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTERS.join(","));

    /* Detect if we need syslog or human-readable formatting */
    if std::env::var("SYSTEMD_EXEC_PID").is_ok_and(|pid| pid == std::process::id().to_string()) {
        Ok(pretty_env_logger::env_logger::builder()
            .format(syslog_format)
            .parse_filters(&log_filters)
            .try_init()?)
    } else {
        Ok(pretty_env_logger::formatted_timed_builder()
            .parse_filters(&log_filters)
            .try_init()?)
    }
}

async fn run(args: Args) -> ApiResult<()> {
    init_logging()?;

    let overrides = Overrides {
        host: args.host.clone(),
        username: args.username.clone(),
    };
    let config = config::parse(&args.config, overrides)?;
    log::debug!("Configuration loaded successfully");

    let bconf = &config.bridge;
    let client = Client::new(&bconf.host, &bconf.username, bconf.timeout())?;

    resolve::apply(&client, &args.to_command()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    /* invalid arguments exit here, before the bridge is contacted */
    let args = Args::parse();

    let res = run(args).await;
    if let Err(err) = &res {
        log::error!("{err}");
    }

    ExitCode::from(exit_code(&res))
}
