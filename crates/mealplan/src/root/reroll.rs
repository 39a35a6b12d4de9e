use mealroll_shared::mealplan::{Session, Warning};
use mealroll_shared::{Catalogue, Day};

impl<C: Catalogue> super::Command<C> {
    /// Draws a new meal for one day.
    ///
    /// The day's current meal is released from the exclusions first, so it may
    /// come back. When nothing matches, the day is left empty and a warning
    /// is returned: the previous meal is not restored.
    #[tracing::instrument(skip(self, session))]
    pub async fn reroll_day(
        &self,
        session: &mut Session,
        day: Day,
    ) -> mealroll_shared::Result<Option<Warning>> {
        if let Some(previous) = session.plan[day].meal.take() {
            session.exclusions.release(&previous);
        }

        self.assign(session, day).await
    }
}
