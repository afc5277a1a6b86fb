// File-based logging via tracing. Writes to ~/.local/share/marquee/marquee.log.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() -> anyhow::Result<()> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("marquee");
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = rolling::never(&data_dir, "marquee.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(EnvFilter::from_default_env().add_directive("marquee=debug".parse()?))
        .init();

    // The guard must outlive the program: leak it so the file writer stays open.
    std::mem::forget(guard);
    Ok(())
}
