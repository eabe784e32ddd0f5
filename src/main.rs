mod app;
mod command;
mod error;
mod model;
mod msg;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use app::App;
use model::config::AppConfig;
use msg::Msg;

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging to file (never stdout)
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "clipedit.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!("clipedit starting");

    let app = App::new(config);
    let result = run(app, io::stdin().lock(), io::stdout().lock(), io::stderr().lock());

    if let Err(e) = &result {
        tracing::error!("session aborted: {e:#}");
    }

    result
}

/// Prompt, read a line, apply it, print the buffer. Repeat until EXIT or EOF.
fn run(
    mut app: App,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<()> {
    let mut raw = Vec::new();

    // ── Main loop ──
    loop {
        write!(out, "{}", app.config.general.prompt)?;
        out.flush()?;

        let msg = if input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(out)?;
            Msg::Quit
        } else {
            match String::from_utf8(std::mem::take(&mut raw)) {
                Ok(line) => Msg::Line(line),
                Err(e) => Msg::Undecodable(e.utf8_error()),
            }
        };

        let result = app.update(msg);
        app.flush_notifications(&mut err)?;
        result?;

        if app.should_quit {
            break;
        }

        app.view(&mut out)?;
    }

    writeln!(out, "{}", app.config.general.farewell)?;
    tracing::info!("clipedit exiting");
    Ok(())
}
