use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Ingredient, Meal, RawIngredient};

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Ingredient::Table)
        .col(
            ColumnDef::new(Ingredient::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Ingredient::MealId).integer().not_null())
        .col(
            ColumnDef::new(Ingredient::RawIngredientId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(Ingredient::Quantity).double().null())
        .col(ColumnDef::new(Ingredient::Unit).string().null())
        .foreign_key(
            ForeignKey::create()
                .from(Ingredient::Table, Ingredient::MealId)
                .to(Meal::Table, Meal::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Ingredient::Table, Ingredient::RawIngredientId)
                .to(RawIngredient::Table, RawIngredient::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Ingredient::Table).to_owned()
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
