use mealroll_shared::Error;
use sea_query::{Expr, ExprTrait, Iden, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

use crate::table::{Category, Ingredient, Meal, RawIngredient, SupermarketArea};

#[derive(Debug, Deserialize, Validate)]
pub struct CatalogueDocument {
    #[validate(nested)]
    pub meals: Vec<MealDocument>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MealDocument {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub quick: bool,
    #[validate(range(min = 1))]
    pub default_servings: u32,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<IngredientDocument>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct IngredientDocument {
    #[validate(length(min = 1))]
    pub name: String,
    pub area: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub meals: usize,
    pub ingredients: usize,
}

impl CatalogueDocument {
    pub fn from_json(input: &str) -> mealroll_shared::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Writes every meal of the document, replacing the ingredient lines of meals
/// that already exist. Nothing is written unless the whole document validates.
pub async fn import(
    pool: &SqlitePool,
    document: &CatalogueDocument,
) -> mealroll_shared::Result<ImportSummary> {
    document.validate()?;

    let mut tx = pool.begin().await?;
    let mut summary = ImportSummary::default();

    for meal in &document.meals {
        let category_id =
            upsert_name(&mut tx, Category::Table, Category::Id, Category::Name, &meal.category)
                .await?;
        let meal_id = upsert_meal(&mut tx, meal, category_id).await?;

        let statement = Query::delete()
            .from_table(Ingredient::Table)
            .and_where(Expr::col(Ingredient::MealId).eq(meal_id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        for ingredient in &meal.ingredients {
            let raw_ingredient_id = upsert_raw_ingredient(&mut tx, ingredient).await?;

            let statement = Query::insert()
                .into_table(Ingredient::Table)
                .columns([
                    Ingredient::MealId,
                    Ingredient::RawIngredientId,
                    Ingredient::Quantity,
                    Ingredient::Unit,
                ])
                .values_panic([
                    meal_id.into(),
                    raw_ingredient_id.into(),
                    ingredient.quantity.into(),
                    ingredient.unit.to_owned().into(),
                ])
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            summary.ingredients += 1;
        }

        summary.meals += 1;
    }

    tx.commit().await?;

    tracing::info!(
        meals = summary.meals,
        ingredients = summary.ingredients,
        "catalogue imported"
    );

    Ok(summary)
}

async fn upsert_name<T>(
    conn: &mut SqliteConnection,
    table: T,
    id: T,
    name: T,
    value: &str,
) -> mealroll_shared::Result<i64>
where
    T: Iden + Clone + 'static,
{
    let statement = Query::insert()
        .into_table(table.clone())
        .columns([name.clone()])
        .values_panic([value.into()])
        .on_conflict(OnConflict::column(name.clone()).do_nothing().to_owned())
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    select_id(conn, table, id, name, value).await
}

async fn select_id<T>(
    conn: &mut SqliteConnection,
    table: T,
    id: T,
    name: T,
    value: &str,
) -> mealroll_shared::Result<i64>
where
    T: Iden + Clone + 'static,
{
    let statement = Query::select()
        .column(id)
        .from(table)
        .and_where(Expr::col(name).eq(value))
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some((id,)) => Ok(id),
        None => Err(Error::Server(format!("'{value}' missing after upsert"))),
    }
}

async fn upsert_meal(
    conn: &mut SqliteConnection,
    meal: &MealDocument,
    category_id: i64,
) -> mealroll_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(Meal::Table)
        .columns([
            Meal::Name,
            Meal::CategoryId,
            Meal::IsVegetarian,
            Meal::IsVegan,
            Meal::IsQuick,
            Meal::DefaultServings,
        ])
        .values_panic([
            meal.name.to_owned().into(),
            category_id.into(),
            meal.vegetarian.into(),
            meal.vegan.into(),
            meal.quick.into(),
            meal.default_servings.into(),
        ])
        .on_conflict(
            OnConflict::column(Meal::Name)
                .update_columns([
                    Meal::CategoryId,
                    Meal::IsVegetarian,
                    Meal::IsVegan,
                    Meal::IsQuick,
                    Meal::DefaultServings,
                ])
                .to_owned(),
        )
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    select_id(conn, Meal::Table, Meal::Id, Meal::Name, &meal.name).await
}

async fn upsert_raw_ingredient(
    conn: &mut SqliteConnection,
    ingredient: &IngredientDocument,
) -> mealroll_shared::Result<i64> {
    let area_id = match ingredient.area.as_deref() {
        Some(area) => Some(
            upsert_name(
                conn,
                SupermarketArea::Table,
                SupermarketArea::Id,
                SupermarketArea::Name,
                area,
            )
            .await?,
        ),
        None => None,
    };

    let on_conflict = match area_id {
        Some(_) => OnConflict::column(RawIngredient::Name)
            .update_column(RawIngredient::AreaId)
            .to_owned(),
        None => OnConflict::column(RawIngredient::Name).do_nothing().to_owned(),
    };

    let statement = Query::insert()
        .into_table(RawIngredient::Table)
        .columns([RawIngredient::Name, RawIngredient::AreaId])
        .values_panic([ingredient.name.to_owned().into(), area_id.into()])
        .on_conflict(on_conflict)
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    select_id(
        conn,
        RawIngredient::Table,
        RawIngredient::Id,
        RawIngredient::Name,
        &ingredient.name,
    )
    .await
}
