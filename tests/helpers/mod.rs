#![allow(dead_code)]

use std::path::PathBuf;

use mealroll::Config;
use mealroll::config::{DatabaseConfig, ObservabilityConfig};
use mealroll_db::SqliteCatalogue;
use temp_dir::TempDir;

pub fn demo_catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/catalogue.json")
}

pub fn config(dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.child("mealroll.db").display()),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Migrated database holding the demo catalogue.
pub async fn setup_demo_catalogue(dir: &TempDir) -> anyhow::Result<SqliteCatalogue> {
    let config = config(dir);
    mealroll::migrate::migrate(&config).await?;

    let pool = mealroll::create_pool(&config.database.url, 1).await?;
    mealroll::cli::catalogue::import(&pool, &demo_catalogue_path(), &mut std::io::sink()).await?;

    Ok(SqliteCatalogue::new(pool))
}
