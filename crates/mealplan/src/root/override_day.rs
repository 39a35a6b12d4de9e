use mealroll_shared::mealplan::Session;
use mealroll_shared::{Catalogue, Day};

impl<C: Catalogue> super::Command<C> {
    /// Puts the named meal on `day` regardless of filters and exclusions.
    ///
    /// Returns `false` and leaves the day untouched when the catalogue has no
    /// meal by that name. Exclusions are not updated: an overridden meal may
    /// still be drawn for another day by a later reroll.
    #[tracing::instrument(skip(self, session))]
    pub async fn override_day(
        &self,
        session: &mut Session,
        day: Day,
        name: &str,
    ) -> mealroll_shared::Result<bool> {
        let Some(meal) = self.meal_by_name(name).await? else {
            tracing::warn!(%day, name, "override names an unknown meal");

            return Ok(false);
        };

        session.plan[day].assign(meal);

        Ok(true)
    }
}
