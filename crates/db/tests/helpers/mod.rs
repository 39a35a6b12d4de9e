use mealroll_db::CatalogueDocument;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealroll_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub fn document() -> CatalogueDocument {
    CatalogueDocument::from_json(
        r#"{
            "meals": [
                {
                    "name": "Veg Curry",
                    "category": "Curry",
                    "vegetarian": true,
                    "vegan": true,
                    "default_servings": 2,
                    "ingredients": [
                        {"name": "Onion", "area": "Produce", "quantity": 1, "unit": "pc"},
                        {"name": "Chickpeas", "area": "Tins", "quantity": 1, "unit": "tin"},
                        {"name": "Salt"}
                    ]
                },
                {
                    "name": "Beef Chilli",
                    "category": "Chilli",
                    "default_servings": 4,
                    "ingredients": [
                        {"name": "Beef Mince", "area": "Meat", "quantity": 500, "unit": "g"},
                        {"name": "Onion", "area": "Produce", "quantity": 2, "unit": "pc"}
                    ]
                },
                {
                    "name": "Pesto Pasta",
                    "category": "Pasta",
                    "vegetarian": true,
                    "quick": true,
                    "default_servings": 4,
                    "ingredients": [
                        {"name": "Pasta", "area": "Dry Goods", "quantity": 400, "unit": "g"},
                        {"name": "Pesto", "quantity": 1, "unit": "jar"}
                    ]
                },
                {
                    "name": "Tofu Stir Fry",
                    "category": "Stir Fry",
                    "vegetarian": true,
                    "vegan": true,
                    "quick": true,
                    "default_servings": 2,
                    "ingredients": [
                        {"name": "Tofu", "area": "Chilled", "quantity": 280, "unit": "g"}
                    ]
                }
            ]
        }"#,
    )
    .unwrap()
}
