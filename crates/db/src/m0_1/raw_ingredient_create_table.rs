use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{RawIngredient, SupermarketArea};

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(RawIngredient::Table)
        .col(
            ColumnDef::new(RawIngredient::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(RawIngredient::Name)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(RawIngredient::AreaId).integer().null())
        .foreign_key(
            ForeignKey::create()
                .from(RawIngredient::Table, RawIngredient::AreaId)
                .to(SupermarketArea::Table, SupermarketArea::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(RawIngredient::Table).to_owned()
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
