use mealroll_shared::Catalogue;
use mealroll_shared::mealplan::Session;

impl<C: Catalogue> super::Command<C> {
    /// Resets plan, exclusions, filters and headcounts to their defaults.
    pub fn clear_all(&self, session: &mut Session) {
        session.clear();
        tracing::info!("session cleared");
    }
}
