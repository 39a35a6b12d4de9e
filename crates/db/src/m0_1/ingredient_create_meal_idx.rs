use sea_query::{Index, IndexCreateStatement, IndexDropStatement};

use crate::table::Ingredient;

fn up_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_ingredient_meal_id")
        .table(Ingredient::Table)
        .col(Ingredient::MealId)
        .to_owned()
}

fn down_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_ingredient_meal_id")
        .table(Ingredient::Table)
        .to_owned()
}

pub struct Operation;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
