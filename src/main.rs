use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{ServerOverrides, Settings};
use std::path::PathBuf;

/// The main entry point for the election administration API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(overrides) => {
            settings.apply_overrides(overrides);
            web_server::run_server(&settings).await?;
        }
        Commands::Migrate => {
            migrate(&settings).await?;
        }
        Commands::Seed => {
            let pool = migrate(&settings).await?;
            database::seed(&pool).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Administrative HTTP API over candidates, voters and parties.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file, layered under `ELECTION_*` environment variables.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Serve(ServerOverrides),
    /// Apply pending database migrations and exit.
    Migrate,
    /// Apply migrations, then load the bundled parties, candidates and voters.
    Seed,
}

async fn migrate(settings: &Settings) -> anyhow::Result<database::SqlitePool> {
    let pool = database::connect(&settings.database).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(url = %settings.database.url, "Migrations applied.");
    Ok(pool)
}
