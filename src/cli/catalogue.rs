use std::io::Write;
use std::path::Path;

use mealroll_db::{CatalogueDocument, SqliteCatalogue};
use mealroll_shared::Catalogue;
use sqlx::SqlitePool;

/// Import a JSON catalogue document
pub async fn import(pool: &SqlitePool, path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(path)?;
    let document = CatalogueDocument::from_json(&input)?;
    let summary = mealroll_db::import(pool, &document).await?;

    writeln!(
        out,
        "Imported {} meals with {} ingredient lines from {}",
        summary.meals,
        summary.ingredients,
        path.display()
    )?;

    Ok(())
}

pub async fn meals(catalogue: &SqliteCatalogue, out: &mut impl Write) -> anyhow::Result<()> {
    for name in catalogue.meal_names().await? {
        writeln!(out, "{name}")?;
    }

    Ok(())
}
