use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealroll::Config;
use mealroll::cli::{plan::PlanArgs, session::Repl};
use mealroll_db::SqliteCatalogue;

/// mealroll - weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealroll")]
#[command(about = "Plan a week of dinners and get the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Import meals from a JSON catalogue document
    Import {
        /// Catalogue document path
        file: PathBuf,
    },
    /// List meal names
    Meals,
    /// Plan a week in one go
    Plan(PlanArgs),
    /// Plan interactively from stdin
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealroll::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Migrate => mealroll::migrate::migrate(&config).await,
        Commands::Reset => mealroll::migrate::reset(&config).await,
        Commands::Import { file } => import_command(config, file).await,
        Commands::Meals => meals_command(config).await,
        Commands::Plan(args) => plan_command(config, args).await,
        Commands::Session => session_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn import_command(config: Config, file: PathBuf) -> Result<()> {
    let pool = mealroll::create_pool(&config.database.url, 1).await?;
    let mut out = std::io::stdout().lock();
    mealroll::cli::catalogue::import(&pool, &file, &mut out).await
}

#[tracing::instrument(skip(config))]
async fn meals_command(config: Config) -> Result<()> {
    let catalogue = catalogue(&config).await?;
    let mut out = std::io::stdout().lock();
    mealroll::cli::catalogue::meals(&catalogue, &mut out).await
}

#[tracing::instrument(skip_all)]
async fn plan_command(config: Config, args: PlanArgs) -> Result<()> {
    let catalogue = Arc::new(catalogue(&config).await?);
    let mut out = BufWriter::new(std::io::stdout().lock());
    mealroll::cli::plan::run(catalogue, args, &mut out).await?;
    out.flush()?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn session_command(config: Config) -> Result<()> {
    let catalogue = Arc::new(catalogue(&config).await?);
    let mut out = std::io::stdout().lock();
    Repl::new(catalogue)
        .run(std::io::stdin().lock(), &mut out)
        .await
}

async fn catalogue(config: &Config) -> Result<SqliteCatalogue> {
    let pool =
        mealroll::create_pool(&config.database.url, config.database.max_connections).await?;

    Ok(SqliteCatalogue::new(pool))
}
