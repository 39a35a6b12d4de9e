use std::future::Future;
use std::sync::RwLock;

use mealroll_shared::mealplan::{Exclusions, Filter, Filters};
use mealroll_shared::{Catalogue, Error, IngredientLine};
use sea_query::{
    Alias, Expr, ExprTrait, Func, JoinType, Order, Query, SelectStatement, SimpleExpr,
    SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::table::{Category, Ingredient, Meal, RawIngredient, SupermarketArea};

/// Catalogue backed by the SQLite schema of this crate.
///
/// A statement failing with a connection-class error is retried once on a
/// freshly connected pool. A second failure is reported as
/// [`Error::StoreUnavailable`].
pub struct SqliteCatalogue {
    pool: RwLock<SqlitePool>,
}

impl SqliteCatalogue {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool: RwLock::new(pool),
        }
    }

    pub fn pool(&self) -> SqlitePool {
        match self.pool.read() {
            Ok(pool) => pool.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn reconnect(&self) -> Result<SqlitePool, sqlx::Error> {
        let stale = self.pool();
        let options = (*stale.connect_options()).clone();
        let fresh = stale.options().clone().connect_with(options).await?;

        match self.pool.write() {
            Ok(mut pool) => *pool = fresh.clone(),
            Err(poisoned) => *poisoned.into_inner() = fresh.clone(),
        }

        stale.close().await;
        tracing::info!("catalogue pool reconnected");

        Ok(fresh)
    }

    async fn with_retry<T, F, Fut>(&self, operation: &'static str, run: F) -> mealroll_shared::Result<T>
    where
        F: Fn(SqlitePool) -> Fut,
        Fut: Future<Output = Result<T, sqlx::Error>>,
    {
        let err = match run(self.pool()).await {
            Ok(value) => return Ok(value),
            Err(err) if is_connection_error(&err) => err,
            Err(err) => return Err(err.into()),
        };

        tracing::warn!(operation, error = %err, "catalogue connection failed, retrying once");

        let pool = self
            .reconnect()
            .await
            .map_err(|e| Error::StoreUnavailable(format!("{operation}: {e}")))?;

        match run(pool).await {
            Ok(value) => Ok(value),
            Err(err) if is_connection_error(&err) => {
                Err(Error::StoreUnavailable(format!("{operation}: {err}")))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl From<SqlitePool> for SqliteCatalogue {
    fn from(value: SqlitePool) -> Self {
        Self::new(value)
    }
}

pub fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

fn filter_condition(filter: Filter) -> Option<SimpleExpr> {
    let col = match filter {
        Filter::Veggie => Meal::IsVegetarian,
        Filter::Vegan => Meal::IsVegan,
        Filter::Quick => Meal::IsQuick,
        Filter::Skip => return None,
    };

    Some(Expr::col((Meal::Table, col)).eq(true))
}

fn select_meal() -> SelectStatement {
    Query::select()
        .columns([
            (Meal::Table, Meal::Id),
            (Meal::Table, Meal::Name),
            (Meal::Table, Meal::IsVegetarian),
            (Meal::Table, Meal::IsVegan),
            (Meal::Table, Meal::IsQuick),
            (Meal::Table, Meal::DefaultServings),
        ])
        .expr_as(
            Expr::col((Category::Table, Category::Name)),
            Alias::new("category"),
        )
        .from(Meal::Table)
        .join(
            JoinType::InnerJoin,
            Category::Table,
            Expr::col((Meal::Table, Meal::CategoryId)).equals((Category::Table, Category::Id)),
        )
        .to_owned()
}

fn candidate_statement(filters: &Filters, exclusions: &Exclusions) -> SelectStatement {
    let mut statement = select_meal();

    for condition in filters.iter().filter_map(filter_condition) {
        statement.and_where(condition);
    }

    if !exclusions.meal_ids.is_empty() {
        statement.and_where(
            Expr::col((Meal::Table, Meal::Id)).is_not_in(exclusions.meal_ids.iter().copied()),
        );
    }

    if !exclusions.categories.is_empty() {
        statement.and_where(
            Expr::col((Category::Table, Category::Name))
                .is_not_in(exclusions.categories.iter().cloned()),
        );
    }

    statement
        .order_by_expr(SimpleExpr::FunctionCall(Func::random()), Order::Asc)
        .limit(1)
        .to_owned()
}

#[async_trait::async_trait]
impl Catalogue for SqliteCatalogue {
    async fn meal_names(&self) -> mealroll_shared::Result<Vec<String>> {
        let statement = Query::select()
            .distinct()
            .column(Meal::Name)
            .from(Meal::Table)
            .order_by(Meal::Name, Order::Asc)
            .to_owned();

        let rows = self
            .with_retry("meal_names", |pool| {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                async move {
                    sqlx::query_as_with::<_, (String,), _>(&sql, values)
                        .fetch_all(&pool)
                        .await
                }
            })
            .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    async fn find_candidate(
        &self,
        filters: &Filters,
        exclusions: &Exclusions,
    ) -> mealroll_shared::Result<Option<mealroll_shared::Meal>> {
        let statement = candidate_statement(filters, exclusions);

        let meal = self
            .with_retry("find_candidate", |pool| {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                async move {
                    sqlx::query_as_with::<_, mealroll_shared::Meal, _>(&sql, values)
                        .fetch_optional(&pool)
                        .await
                }
            })
            .await?;

        tracing::debug!(found = meal.is_some(), "candidate query");

        Ok(meal)
    }

    async fn meal_by_name(&self, name: &str) -> mealroll_shared::Result<Option<mealroll_shared::Meal>> {
        let statement = select_meal()
            .and_where(Expr::col((Meal::Table, Meal::Name)).eq(name))
            .to_owned();

        self.with_retry("meal_by_name", |pool| {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            async move {
                sqlx::query_as_with::<_, mealroll_shared::Meal, _>(&sql, values)
                    .fetch_optional(&pool)
                    .await
            }
        })
        .await
    }

    async fn ingredients(&self, meal_id: i64) -> mealroll_shared::Result<Vec<IngredientLine>> {
        let statement = Query::select()
            .expr_as(
                Expr::col((RawIngredient::Table, RawIngredient::Name)),
                Alias::new("name"),
            )
            .expr_as(
                Expr::col((SupermarketArea::Table, SupermarketArea::Name)),
                Alias::new("area"),
            )
            .columns([
                (Ingredient::Table, Ingredient::Quantity),
                (Ingredient::Table, Ingredient::Unit),
            ])
            .from(Ingredient::Table)
            .join(
                JoinType::InnerJoin,
                RawIngredient::Table,
                Expr::col((Ingredient::Table, Ingredient::RawIngredientId))
                    .equals((RawIngredient::Table, RawIngredient::Id)),
            )
            .join(
                JoinType::LeftJoin,
                SupermarketArea::Table,
                Expr::col((RawIngredient::Table, RawIngredient::AreaId))
                    .equals((SupermarketArea::Table, SupermarketArea::Id)),
            )
            .and_where(Expr::col((Ingredient::Table, Ingredient::MealId)).eq(meal_id))
            .order_by((Ingredient::Table, Ingredient::Id), Order::Asc)
            .to_owned();

        self.with_retry("ingredients", |pool| {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            async move {
                sqlx::query_as_with::<_, IngredientLine, _>(&sql, values)
                    .fetch_all(&pool)
                    .await
            }
        })
        .await
    }
}
