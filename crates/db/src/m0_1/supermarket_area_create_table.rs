use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::SupermarketArea;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(SupermarketArea::Table)
        .col(
            ColumnDef::new(SupermarketArea::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SupermarketArea::Name)
                .string()
                .not_null()
                .unique_key(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(SupermarketArea::Table).to_owned()
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
