use mealroll_shared::mealplan::Session;
use mealroll_shopping::ShoppingList;

/// One line per day: name, people, active filters and the meal label.
pub fn render_plan(session: &Session) -> String {
    session
        .plan
        .iter()
        .map(|(day, assignment)| {
            let filters = assignment
                .filters
                .iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect::<Vec<_>>();
            let filters = if filters.is_empty() {
                String::new()
            } else {
                format!(" [{}]", filters.join(", "))
            };
            let label = assignment
                .label()
                .unwrap_or_else(|| "No meal selected.".to_owned());

            format!(
                "{:<9} x{}{filters}: {label}\n",
                day.as_ref(),
                assignment.headcount.get()
            )
        })
        .collect()
}

/// Items under one heading per supermarket area.
pub fn render_shopping_list(list: &ShoppingList) -> String {
    list.areas()
        .into_iter()
        .map(|(area, items)| {
            let items = items
                .iter()
                .map(|item| format!("  - {item}\n"))
                .collect::<String>();

            format!("{area}\n{items}")
        })
        .collect()
}
