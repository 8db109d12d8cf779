mod score_store;
mod server_config;
mod web_server;

use clap::Parser;

use snake_engine::{log, logger};

use score_store::ScoreStore;
use server_config::ServerConfig;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "snake_game_server")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args
        .config
        .unwrap_or_else(|| "snake_game_server_config.yaml".to_string());
    let config = ServerConfig::load(&config_path)?;

    let score_store = ScoreStore::load(&config.scores_file, config.max_top_scores)?;
    log!("Snake Game Server using scores file {}", config.scores_file);

    run_web_server(&config, score_store).await;

    log!("Server shut down gracefully");

    Ok(())
}
