mod category_create_table;
mod ingredient_create_meal_idx;
mod ingredient_create_table;
mod meal_create_table;
mod raw_ingredient_create_table;
mod supermarket_area_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealroll",
    "m0_1",
    vec_box![],
    vec_box![
        category_create_table::Operation,
        supermarket_area_create_table::Operation,
        raw_ingredient_create_table::Operation,
        meal_create_table::Operation,
        ingredient_create_table::Operation,
        ingredient_create_meal_idx::Operation
    ]
);
