#![allow(dead_code)]

use mealroll_shared::{Meal, MemoryCatalogue};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub struct MealBuilder(Meal);

impl MealBuilder {
    pub fn new(id: i64, category: &str) -> Self {
        Self(Meal {
            id,
            name: format!("meal {id}"),
            category: category.to_owned(),
            is_vegetarian: false,
            is_vegan: false,
            is_quick: false,
            default_servings: 2,
        })
    }

    pub fn name(mut self, name: &str) -> Self {
        self.0.name = name.to_owned();
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.0.is_vegetarian = true;
        self
    }

    pub fn vegan(mut self) -> Self {
        self.0.is_vegetarian = true;
        self.0.is_vegan = true;
        self
    }

    pub fn quick(mut self) -> Self {
        self.0.is_quick = true;
        self
    }

    pub fn build(self) -> Meal {
        self.0
    }
}

pub fn catalogue(meals: impl IntoIterator<Item = Meal>) -> MemoryCatalogue {
    meals
        .into_iter()
        .fold(MemoryCatalogue::new(), |c, meal| c.with_meal(meal, vec![]))
}

/// Twenty meals, each in its own category, a third of them vegetarian.
pub fn varied_catalogue() -> MemoryCatalogue {
    catalogue((1..=20).map(|id| {
        let meal = MealBuilder::new(id, &format!("category {id}"));
        match id % 3 {
            0 => meal.vegetarian().build(),
            1 => meal.quick().build(),
            _ => meal.build(),
        }
    }))
}

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealroll_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}
