use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Category {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone)]
pub enum SupermarketArea {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone)]
pub enum RawIngredient {
    Table,
    Id,
    Name,
    AreaId,
}

#[derive(Iden, Clone)]
pub enum Meal {
    Table,
    Id,
    Name,
    CategoryId,
    IsVegetarian,
    IsVegan,
    IsQuick,
    DefaultServings,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    MealId,
    RawIngredientId,
    Quantity,
    Unit,
}
