use mealroll_shared::mealplan::{Session, Warning};
use mealroll_shared::{Catalogue, Day};

use crate::priority_order;

impl<C: Catalogue> super::Command<C> {
    /// Plans the whole week from scratch, scarcest filter combinations first.
    ///
    /// Assignments, exclusions and dietary flags are reset beforehand; filters
    /// and headcounts are kept. Days left without a meal because nothing
    /// matched are reported as warnings, in the order they were resolved.
    #[tracing::instrument(skip_all)]
    pub async fn generate_week(
        &self,
        session: &mut Session,
    ) -> mealroll_shared::Result<Vec<Warning>> {
        session.reset_for_generation();

        let mut warnings = vec![];

        for day in priority_order(&session.plan) {
            if let Some(warning) = self.assign(session, day).await? {
                warnings.push(warning);
            }
        }

        tracing::info!(
            planned = session.plan.assigned().count(),
            warnings = warnings.len(),
            "week generated"
        );

        Ok(warnings)
    }

    pub(crate) async fn assign(
        &self,
        session: &mut Session,
        day: Day,
    ) -> mealroll_shared::Result<Option<Warning>> {
        if session.plan[day].filters.is_skip() {
            session.plan[day].unassign();

            return Ok(None);
        }

        let candidate = self
            .find_candidate(&session.plan[day].filters, &session.exclusions)
            .await?;

        let Some(meal) = candidate else {
            tracing::warn!(%day, "no meal matches the criteria");
            session.plan[day].unassign();

            return Ok(Some(Warning::NoCandidateFound { day }));
        };

        tracing::debug!(%day, meal = %meal.name, category = %meal.category, "meal assigned");

        session.exclusions.claim(&meal);
        session.plan[day].assign(meal);

        Ok(None)
    }
}
