use std::ops::Deref;

use mealroll_shared::Catalogue;
use mealroll_shared::mealplan::Session;

use crate::{ShoppingList, merge, scale_lines};

pub struct Command<C: Catalogue> {
    catalogue: C,
}

impl<C: Catalogue> Deref for Command<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.catalogue
    }
}

impl<C: Catalogue> Command<C> {
    pub fn new(catalogue: C) -> Self {
        Self { catalogue }
    }

    /// Builds the shopping list of every planned day, scaled to each day's
    /// headcount. Returns `None` when no day holds a meal.
    #[tracing::instrument(skip_all)]
    pub async fn create_shopping_list(
        &self,
        session: &Session,
    ) -> mealroll_shared::Result<Option<ShoppingList>> {
        if session.plan.is_empty() {
            tracing::warn!("no meals selected for the week");

            return Ok(None);
        }

        let mut lines = vec![];

        for (day, meal, headcount) in session.plan.assigned() {
            let ingredients = self.ingredients(meal.id).await?;
            tracing::debug!(%day, meal = %meal.name, people = headcount.get(), lines = ingredients.len());

            lines.extend(scale_lines(meal, headcount, ingredients)?);
        }

        let list = ShoppingList {
            items: merge(lines),
        };

        tracing::info!(items = list.len(), "shopping list created");

        Ok(Some(list))
    }
}
