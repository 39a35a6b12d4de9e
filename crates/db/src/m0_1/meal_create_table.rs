use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Category, Meal};

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Meal::Table)
        .col(
            ColumnDef::new(Meal::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Meal::Name).string().not_null().unique_key())
        .col(ColumnDef::new(Meal::CategoryId).integer().not_null())
        .col(
            ColumnDef::new(Meal::IsVegetarian)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Meal::IsVegan)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Meal::IsQuick)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Meal::DefaultServings)
                .integer()
                .not_null()
                .default(2),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Meal::Table, Meal::CategoryId)
                .to(Category::Table, Category::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Meal::Table).to_owned()
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
