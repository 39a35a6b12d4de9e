use sqlx_migrator::{Info, Migrator};

mod catalogue;
mod import;
pub(crate) mod m0_1;
pub mod table;

pub use catalogue::*;
pub use import::*;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}
