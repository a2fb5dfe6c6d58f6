use std::{io, process::ExitCode, sync::OnceLock};

use application::{run, Args, Config, Console};
use console::infra::Http;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| enabled(meta, false))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| enabled(meta, true))),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Decides whether an event described by the provided [`log::Metadata`] goes
/// to the stderr layer (if `stderr`) or to the stdout one.
fn enabled(meta: &log::Metadata<'_>, stderr: bool) -> bool {
    let level = LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO);
    meta.is_span()
        || (STDERR_LEVELS.contains(meta.level()) == stderr)
            && level >= *meta.level()
}

async fn start() -> Result<(), u8> {
    let Args { config, command } = Args::parse().map_err(|e| {
        _ = e.print();
        u8::try_from(e.exit_code()).unwrap_or(2)
    })?;

    let Config { api, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
        2
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let http = Http::new(&(&api).into(), api.session()).map_err(|e| {
        log::error!("failed to initialize `Http` client: {e}");
        1
    })?;

    run(&Console::new(http), command).await.map_err(|e| {
        log::error!("{e}");
        e.class.exit_code()
    })
}
