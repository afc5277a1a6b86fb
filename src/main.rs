// Entry point: resolves the API credential, loads config, and runs the TUI.

use clap::Parser;

use marquee::app::App;
use marquee::config::Config;
use marquee::logging;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal UI for movie discovery via TMDB")]
struct Cli {
    /// TMDB API key (overrides the config file and TMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(key) = cli.api_key {
        config.api.api_key = Some(key);
    }

    logging::init()?;

    if config.resolve_api_key().is_none() {
        eprintln!("Error: no TMDB API key configured.");
        eprintln!(
            "Set TMDB_API_KEY, pass --api-key, or add api_key under [api] in {}",
            Config::config_path().display()
        );
        std::process::exit(1);
    }

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
