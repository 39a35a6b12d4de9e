use std::io::Write;
use std::sync::Arc;

use clap::Args;
use mealroll_shared::mealplan::{Filters, Headcount, Session, Warning};
use mealroll_shared::{Catalogue, Day};

use super::{parse_day, parse_day_filters, parse_day_headcount, parse_day_meal};

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Filters of a day, e.g. monday=vegan,quick (veggie, vegan, quick, skip)
    #[arg(long = "filter", value_name = "DAY=FILTERS", value_parser = parse_day_filters)]
    pub filters: Vec<(Day, Filters)>,

    /// People eating on a day, 1 to 10 (default 2)
    #[arg(long = "people", value_name = "DAY=N", value_parser = parse_day_headcount)]
    pub people: Vec<(Day, Headcount)>,

    /// Replace the generated meal of a day by name
    #[arg(long = "override", value_name = "DAY=NAME", value_parser = parse_day_meal)]
    pub overrides: Vec<(Day, String)>,

    /// Draw another meal for a day after generating
    #[arg(long = "reroll", value_name = "DAY", value_parser = parse_day)]
    pub rerolls: Vec<Day>,

    /// Print the shopping list of the planned week
    #[arg(long)]
    pub shopping_list: bool,
}

/// Generates the week, then applies rerolls and overrides in that order.
pub async fn run<C: Catalogue>(
    catalogue: Arc<C>,
    args: PlanArgs,
    out: &mut impl Write,
) -> anyhow::Result<Session> {
    let planner = mealroll_mealplan::Command::new(catalogue.clone());
    let mut session = Session::new();

    for (day, filters) in args.filters {
        session.set_filters(day, filters);
    }
    for (day, headcount) in args.people {
        session.set_headcount(day, headcount);
    }

    for warning in planner.generate_week(&mut session).await? {
        writeln!(out, "{warning}")?;
    }

    for day in args.rerolls {
        if let Some(warning) = planner.reroll_day(&mut session, day).await? {
            writeln!(out, "{warning}")?;
        }
    }

    for (day, name) in args.overrides {
        if !planner.override_day(&mut session, day, &name).await? {
            writeln!(out, "Unknown meal '{name}', keeping {day} as is.")?;
        }
    }

    write!(out, "{}", super::render_plan(&session))?;

    if args.shopping_list {
        let shopping = mealroll_shopping::Command::new(catalogue);
        match shopping.create_shopping_list(&session).await? {
            Some(list) => write!(out, "\n{}", super::render_shopping_list(&list))?,
            None => writeln!(out, "{}", Warning::EmptyPlanForShoppingList)?,
        }
    }

    Ok(session)
}
