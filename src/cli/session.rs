use std::io::{BufRead, Write};
use std::sync::Arc;

use mealroll_shared::mealplan::{Filters, Headcount, Session, Warning};
use mealroll_shared::{Catalogue, Day};

use super::{parse_day, parse_filters, parse_headcount};

pub const HELP: &str = "\
commands:
  filter DAY [veggie|vegan|quick|skip ..]   set a day's filters (none clears)
  people DAY N                              set people eating on a day (1-10)
  generate                                  plan the whole week
  reroll DAY                                draw another meal for a day
  override DAY NAME                         pick a meal by name
  show                                      print the week
  shop                                      print the shopping list
  clear                                     start over
  meals                                     list meal names
  help                                      show this help
  quit                                      leave the session";

#[derive(Debug, PartialEq)]
pub enum Input {
    Filter(Day, Filters),
    People(Day, Headcount),
    Generate,
    Reroll(Day),
    Override(Day, String),
    Show,
    Shop,
    Clear,
    Meals,
    Help,
    Quit,
}

impl Input {
    /// Parses one session line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        let input = match command.to_lowercase().as_str() {
            "" => return Ok(None),
            "filter" => {
                let (day, rest) = split_day(command, rest)?;
                Input::Filter(day, parse_filters(rest)?)
            }
            "people" => {
                let (day, rest) = split_day(command, rest)?;
                Input::People(day, parse_headcount(rest)?)
            }
            "generate" => Input::Generate,
            "reroll" => Input::Reroll(split_day(command, rest)?.0),
            "override" => {
                let (day, name) = split_day(command, rest)?;
                if name.is_empty() {
                    return Err(format!("'override' needs a meal name for {day}"));
                }
                Input::Override(day, name.to_owned())
            }
            "show" => Input::Show,
            "shop" => Input::Shop,
            "clear" => Input::Clear,
            "meals" => Input::Meals,
            "help" | "?" => Input::Help,
            "quit" | "exit" => Input::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };

        Ok(Some(input))
    }
}

fn split_day<'a>(command: &str, rest: &'a str) -> Result<(Day, &'a str), String> {
    let (day, rest) = rest
        .split_once(char::is_whitespace)
        .map(|(d, r)| (d, r.trim()))
        .unwrap_or((rest, ""));
    if day.is_empty() {
        return Err(format!("'{command}' needs a day"));
    }

    Ok((parse_day(day)?, rest))
}

/// Interactive planning session. Owns the planning state of one user.
pub struct Repl<C: Catalogue> {
    planner: mealroll_mealplan::Command<Arc<C>>,
    shopping: mealroll_shopping::Command<Arc<C>>,
    pub session: Session,
}

impl<C: Catalogue> Repl<C> {
    pub fn new(catalogue: Arc<C>) -> Self {
        Self {
            planner: mealroll_mealplan::Command::new(catalogue.clone()),
            shopping: mealroll_shopping::Command::new(catalogue),
            session: Session::new(),
        }
    }

    /// Reads commands until `quit` or end of input. A failing command is
    /// reported and the session keeps its state.
    pub async fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match Input::parse(&line) {
                Ok(Some(Input::Quit)) => break,
                Ok(Some(input)) => {
                    if let Err(e) = self.execute(input, out).await {
                        tracing::error!(error = %e, "session command failed");
                        writeln!(out, "{e}")?;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }

        Ok(())
    }

    pub async fn execute(&mut self, input: Input, out: &mut impl Write) -> anyhow::Result<()> {
        match input {
            Input::Filter(day, filters) => self.session.set_filters(day, filters),
            Input::People(day, headcount) => self.session.set_headcount(day, headcount),
            Input::Generate => {
                for warning in self.planner.generate_week(&mut self.session).await? {
                    writeln!(out, "{warning}")?;
                }
                write!(out, "{}", super::render_plan(&self.session))?;
            }
            Input::Reroll(day) => {
                if let Some(warning) = self.planner.reroll_day(&mut self.session, day).await? {
                    writeln!(out, "{warning}")?;
                }
                write!(out, "{}", super::render_plan(&self.session))?;
            }
            Input::Override(day, name) => {
                if self
                    .planner
                    .override_day(&mut self.session, day, &name)
                    .await?
                {
                    write!(out, "{}", super::render_plan(&self.session))?;
                } else {
                    writeln!(out, "Unknown meal '{name}', keeping {day} as is.")?;
                }
            }
            Input::Show => write!(out, "{}", super::render_plan(&self.session))?,
            Input::Shop => match self.shopping.create_shopping_list(&self.session).await? {
                Some(list) => write!(out, "{}", super::render_shopping_list(&list))?,
                None => writeln!(out, "{}", Warning::EmptyPlanForShoppingList)?,
            },
            Input::Clear => self.planner.clear_all(&mut self.session),
            Input::Meals => {
                for name in self.planner.meal_names().await? {
                    writeln!(out, "{name}")?;
                }
            }
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealroll_shared::mealplan::Filter;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("   "), Ok(None));
        assert_eq!(Input::parse("generate"), Ok(Some(Input::Generate)));
        assert_eq!(Input::parse("QUIT"), Ok(Some(Input::Quit)));
        assert_eq!(
            Input::parse("reroll wed"),
            Err("unknown day 'wed'".to_owned())
        );
        assert_eq!(
            Input::parse("reroll wednesday"),
            Ok(Some(Input::Reroll(Day::Wednesday)))
        );
        assert_eq!(
            Input::parse("override friday  Beef Chilli "),
            Ok(Some(Input::Override(Day::Friday, "Beef Chilli".to_owned())))
        );
        assert!(Input::parse("override friday").is_err());
        assert!(Input::parse("cook").is_err());
    }

    #[test]
    fn test_parse_filter_and_people() {
        assert_eq!(
            Input::parse("filter monday vegan quick"),
            Ok(Some(Input::Filter(
                Day::Monday,
                Filters::new([Filter::Vegan, Filter::Quick])
            )))
        );
        assert_eq!(
            Input::parse("filter monday"),
            Ok(Some(Input::Filter(Day::Monday, Filters::default())))
        );
        assert_eq!(
            Input::parse("people sunday 6"),
            Ok(Some(Input::People(Day::Sunday, Headcount::new(6).unwrap())))
        );
        assert!(Input::parse("people sunday 11").is_err());
        assert!(Input::parse("people").is_err());
    }
}
