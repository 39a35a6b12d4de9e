pub mod catalogue;
pub mod plan;
mod render;
pub mod session;

pub use render::*;

use std::str::FromStr;

use mealroll_shared::Day;
use mealroll_shared::mealplan::{Filter, Filters, Headcount};

pub fn parse_day(value: &str) -> Result<Day, String> {
    Day::from_str(value.trim()).map_err(|_| format!("unknown day '{value}'"))
}

/// Parses filter names separated by commas or whitespace. `none` or an empty
/// string clears the day's filters.
pub fn parse_filters(value: &str) -> Result<Filters, String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("none"))
        .map(|name| Filter::from_str(name).map_err(|_| format!("unknown filter '{name}'")))
        .collect()
}

pub fn parse_headcount(value: &str) -> Result<Headcount, String> {
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("'{value}' is not a number of people"))?;

    Headcount::new(value).map_err(|e| e.to_string())
}

/// Splits `DAY=VALUE`.
fn split_day(arg: &str) -> Result<(Day, &str), String> {
    let Some((day, value)) = arg.split_once('=') else {
        return Err(format!("expected DAY=VALUE, got '{arg}'"));
    };

    Ok((parse_day(day)?, value.trim()))
}

pub fn parse_day_filters(arg: &str) -> Result<(Day, Filters), String> {
    let (day, value) = split_day(arg)?;
    Ok((day, parse_filters(value)?))
}

pub fn parse_day_headcount(arg: &str) -> Result<(Day, Headcount), String> {
    let (day, value) = split_day(arg)?;
    Ok((day, parse_headcount(value)?))
}

pub fn parse_day_meal(arg: &str) -> Result<(Day, String), String> {
    let (day, value) = split_day(arg)?;
    if value.is_empty() {
        return Err(format!("missing meal name for {day}"));
    }

    Ok((day, value.to_owned()))
}
