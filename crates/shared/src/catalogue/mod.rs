mod memory;

pub use memory::*;

use std::sync::Arc;

use crate::mealplan::{Exclusions, Filters};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "full", derive(sqlx::FromRow))]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_quick: bool,
    /// Headcount the stored ingredient quantities are calibrated for.
    pub default_servings: u32,
}

/// Ingredient line of a meal. A `None` quantity means the item has no
/// meaningful amount ("to taste").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "full", derive(sqlx::FromRow))]
pub struct IngredientLine {
    pub name: String,
    pub area: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Read access to the meal catalogue.
///
/// `find_candidate` must draw uniformly among every meal passing `filters`
/// whose id and category are admitted by `exclusions`, and return `None`
/// when nothing qualifies.
#[async_trait::async_trait]
pub trait Catalogue: Send + Sync {
    async fn meal_names(&self) -> crate::Result<Vec<String>>;

    async fn find_candidate(
        &self,
        filters: &Filters,
        exclusions: &Exclusions,
    ) -> crate::Result<Option<Meal>>;

    async fn meal_by_name(&self, name: &str) -> crate::Result<Option<Meal>>;

    async fn ingredients(&self, meal_id: i64) -> crate::Result<Vec<IngredientLine>>;
}

#[async_trait::async_trait]
impl<C: Catalogue + ?Sized> Catalogue for Arc<C> {
    async fn meal_names(&self) -> crate::Result<Vec<String>> {
        (**self).meal_names().await
    }

    async fn find_candidate(
        &self,
        filters: &Filters,
        exclusions: &Exclusions,
    ) -> crate::Result<Option<Meal>> {
        (**self).find_candidate(filters, exclusions).await
    }

    async fn meal_by_name(&self, name: &str) -> crate::Result<Option<Meal>> {
        (**self).meal_by_name(name).await
    }

    async fn ingredients(&self, meal_id: i64) -> crate::Result<Vec<IngredientLine>> {
        (**self).ingredients(meal_id).await
    }
}
