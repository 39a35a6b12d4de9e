use std::collections::HashMap;

use mealroll_shared::mealplan::Headcount;
use mealroll_shared::{Error, IngredientLine, Meal};

use crate::ShoppingItem;

/// Area used for ingredients without a supermarket area.
pub const OTHER_AREA: &str = "Other";

/// Scales a stored quantity from the meal's default servings to `headcount`.
/// A `None` quantity stays `None`.
pub fn scale(
    quantity: Option<f64>,
    headcount: Headcount,
    meal: &Meal,
) -> mealroll_shared::Result<Option<f64>> {
    if meal.default_servings == 0 {
        return Err(Error::InvalidServings {
            meal: meal.name.to_owned(),
            servings: meal.default_servings.into(),
        });
    }

    Ok(quantity.map(|q| q * f64::from(headcount.get()) / f64::from(meal.default_servings)))
}

/// Scales every ingredient line of `meal` for `headcount`.
pub fn scale_lines(
    meal: &Meal,
    headcount: Headcount,
    lines: Vec<IngredientLine>,
) -> mealroll_shared::Result<Vec<IngredientLine>> {
    lines
        .into_iter()
        .map(|line| -> mealroll_shared::Result<IngredientLine> {
            Ok(IngredientLine {
                quantity: scale(line.quantity, headcount, meal)?,
                ..line
            })
        })
        .collect()
}

/// Merges scaled lines sharing (area, name, unit), then sorts by area and name.
///
/// Within one key the result depends on line order: a missing quantity resets
/// the bucket to `None`, and a numeric quantity replaces a `None` bucket or adds
/// to the running sum. `(None, 50)` merges to 50 but `(50, None)` to `None`.
pub fn merge(lines: impl IntoIterator<Item = IngredientLine>) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = vec![];
    let mut index: HashMap<(String, String, Option<String>), usize> = HashMap::new();

    for line in lines {
        let area = line.area.unwrap_or_else(|| OTHER_AREA.to_owned());
        let key = (area, line.name, line.unit);

        match index.get(&key) {
            Some(i) => {
                let item = &mut items[*i];
                let running = item.quantity;
                item.quantity = line.quantity.map(|q| running.map_or(q, |sum| sum + q));
            }
            None => {
                index.insert(key.clone(), items.len());
                let (area, name, unit) = key;
                items.push(ShoppingItem {
                    area,
                    name,
                    quantity: line.quantity,
                    unit,
                });
            }
        }
    }

    items.sort_by(|a, b| (&a.area, &a.name).cmp(&(&b.area, &b.name)));

    items
}
