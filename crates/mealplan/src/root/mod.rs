mod clear;
mod generate;
mod override_day;
mod reroll;

use std::ops::Deref;

use mealroll_shared::Catalogue;

/// Planning commands over one session, backed by a meal catalogue.
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

    /// Names offered when overriding a day, sorted and unique.
    pub async fn meal_names(&self) -> mealroll_shared::Result<Vec<String>> {
        self.catalogue.meal_names().await
    }
}
