use std::collections::{BTreeSet, HashMap};

use rand::seq::IndexedRandom;

use super::{Catalogue, IngredientLine, Meal};
use crate::mealplan::{Exclusions, Filters};

/// Catalogue held entirely in memory, for small static catalogues and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalogue {
    meals: Vec<Meal>,
    ingredients: HashMap<i64, Vec<IngredientLine>>,
}

impl MemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meal(mut self, meal: Meal, ingredients: Vec<IngredientLine>) -> Self {
        self.insert(meal, ingredients);
        self
    }

    pub fn insert(&mut self, meal: Meal, ingredients: Vec<IngredientLine>) {
        self.meals.retain(|m| m.id != meal.id);
        self.ingredients.insert(meal.id, ingredients);
        self.meals.push(meal);
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[async_trait::async_trait]
impl Catalogue for MemoryCatalogue {
    async fn meal_names(&self) -> crate::Result<Vec<String>> {
        let names = self
            .meals
            .iter()
            .map(|m| m.name.to_owned())
            .collect::<BTreeSet<_>>();

        Ok(names.into_iter().collect())
    }

    async fn find_candidate(
        &self,
        filters: &Filters,
        exclusions: &Exclusions,
    ) -> crate::Result<Option<Meal>> {
        let candidates = self
            .meals
            .iter()
            .filter(|m| filters.accepts(m) && exclusions.admits(m))
            .collect::<Vec<_>>();

        tracing::debug!(candidates = candidates.len(), "drawing meal from memory");

        let mut rng = rand::rng();

        Ok(candidates.choose(&mut rng).map(|m| (*m).clone()))
    }

    async fn meal_by_name(&self, name: &str) -> crate::Result<Option<Meal>> {
        Ok(self.meals.iter().find(|m| m.name == name).cloned())
    }

    async fn ingredients(&self, meal_id: i64) -> crate::Result<Vec<IngredientLine>> {
        Ok(self.ingredients.get(&meal_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mealplan::Filter;

    fn meal(id: i64, name: &str, category: &str, vegan: bool) -> Meal {
        Meal {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            is_vegetarian: vegan,
            is_vegan: vegan,
            is_quick: false,
            default_servings: 2,
        }
    }

    #[tokio::test]
    async fn test_meal_names_sorted_unique() -> anyhow::Result<()> {
        let catalogue = MemoryCatalogue::new()
            .with_meal(meal(2, "Tofu Stir Fry", "Stir Fry", true), vec![])
            .with_meal(meal(1, "Beef Chilli", "Chilli", false), vec![]);

        assert_eq!(
            catalogue.meal_names().await?,
            vec!["Beef Chilli".to_owned(), "Tofu Stir Fry".to_owned()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_find_candidate_respects_filters_and_exclusions() -> anyhow::Result<()> {
        let catalogue = MemoryCatalogue::new()
            .with_meal(meal(1, "Beef Chilli", "Chilli", false), vec![])
            .with_meal(meal(2, "Bean Chilli", "Chilli", true), vec![])
            .with_meal(meal(3, "Dal", "Curry", true), vec![]);

        let vegan = Filters::new([Filter::Vegan]);
        let mut exclusions = Exclusions::default();
        exclusions.categories.insert("Chilli".to_owned());

        for _ in 0..20 {
            let found = catalogue.find_candidate(&vegan, &exclusions).await?;
            assert_eq!(found.map(|m| m.id), Some(3));
        }

        exclusions.meal_ids.insert(3);
        assert!(catalogue.find_candidate(&vegan, &exclusions).await?.is_none());

        Ok(())
    }
}
