use anyhow::Context;
use clap::Parser;
use web_projects::utils::logger::{self, LogFormat};
use web_projects::utils::validation::Validate;
use web_projects::{render, AppError, CliConfig, HttpProjectApi, ProjectBoard};

fn report(e: &AppError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => report(&e),
    };
    if let Err(e) = config.validate() {
        report(&e);
    }
    tracing::info!("Using web projects API at {}", config.collection_url());

    let api = HttpProjectApi::new(config).context("failed to build HTTP client")?;
    let mut board = ProjectBoard::new(api);

    if let Err(e) = board.load().await {
        report(&e);
    }

    let outcome = cli.command.apply(&mut board).await;
    println!("{}", render(&board));

    if let Err(e) = outcome {
        report(&e);
    }
    Ok(())
}
