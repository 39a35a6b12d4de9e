use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Day, Meal};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Filter {
    Veggie,
    Vegan,
    Quick,
    Skip,
}

impl Filter {
    /// Boolean test a meal must pass for this filter. `Skip` never constrains a meal,
    /// it short-circuits selection before any candidate is drawn.
    pub fn accepts(&self, meal: &Meal) -> bool {
        match self {
            Filter::Veggie => meal.is_vegetarian,
            Filter::Vegan => meal.is_vegan,
            Filter::Quick => meal.is_quick,
            Filter::Skip => true,
        }
    }
}

/// Active filters of a day. Filters combine conjunctively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters(BTreeSet<Filter>);

impl Filters {
    pub fn new(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self(filters.into_iter().collect())
    }

    pub fn contains(&self, filter: Filter) -> bool {
        self.0.contains(&filter)
    }

    pub fn is_skip(&self) -> bool {
        self.contains(Filter::Skip)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, filter: Filter) {
        self.0.insert(filter);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Filter> + '_ {
        self.0.iter().copied()
    }

    pub fn accepts(&self, meal: &Meal) -> bool {
        self.0.iter().all(|f| f.accepts(meal))
    }
}

impl FromIterator<Filter> for Filters {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Number of people eating on a day, always within `1..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Headcount(u8);

impl Headcount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> crate::Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(crate::Error::InvalidHeadcount(value));
        }

        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Headcount {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for Headcount {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
}

impl From<&Meal> for DietaryFlags {
    fn from(value: &Meal) -> Self {
        Self {
            vegetarian: value.is_vegetarian,
            vegan: value.is_vegan,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayAssignment {
    pub meal: Option<Meal>,
    pub filters: Filters,
    pub headcount: Headcount,
    pub flags: DietaryFlags,
}

impl DayAssignment {
    pub fn assign(&mut self, meal: Meal) {
        self.flags = DietaryFlags::from(&meal);
        self.meal = Some(meal);
    }

    pub fn unassign(&mut self) {
        self.meal = None;
    }

    /// Meal name followed by " (ve)" or " (v)" depending on the day's dietary flags.
    pub fn label(&self) -> Option<String> {
        let meal = self.meal.as_ref()?;
        let suffix = if self.flags.vegan {
            " (ve)"
        } else if self.flags.vegetarian {
            " (v)"
        } else {
            ""
        };

        Some(format!("{}{suffix}", meal.name))
    }
}

/// One assignment per day, indexed by [`Day`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeekPlan([DayAssignment; Day::COUNT]);

impl WeekPlan {
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DayAssignment)> {
        Day::all().map(|day| (day, &self[day]))
    }

    /// Days holding a meal, in week order, with the meal and that day's headcount.
    pub fn assigned(&self) -> impl Iterator<Item = (Day, &Meal, Headcount)> {
        self.iter()
            .filter_map(|(day, a)| a.meal.as_ref().map(|meal| (day, meal, a.headcount)))
    }

    pub fn is_empty(&self) -> bool {
        self.assigned().next().is_none()
    }
}

impl Index<Day> for WeekPlan {
    type Output = DayAssignment;

    fn index(&self, index: Day) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl IndexMut<Day> for WeekPlan {
    fn index_mut(&mut self, index: Day) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

/// Meal ids and categories already used in the current planning pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions {
    pub meal_ids: BTreeSet<i64>,
    pub categories: BTreeSet<String>,
}

impl Exclusions {
    pub fn admits(&self, meal: &Meal) -> bool {
        !self.meal_ids.contains(&meal.id) && !self.categories.contains(&meal.category)
    }

    pub fn claim(&mut self, meal: &Meal) {
        self.meal_ids.insert(meal.id);
        self.categories.insert(meal.category.to_owned());
    }

    pub fn release(&mut self, meal: &Meal) {
        self.meal_ids.remove(&meal.id);
        self.categories.remove(&meal.category);
    }

    pub fn is_empty(&self) -> bool {
        self.meal_ids.is_empty() && self.categories.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    NoCandidateFound { day: Day },
    EmptyPlanForShoppingList,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoCandidateFound { day } => {
                write!(f, "No meals match the criteria for {day}.")
            }
            Warning::EmptyPlanForShoppingList => write!(f, "No meals selected for the week."),
        }
    }
}

/// Planning state private to one user session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub plan: WeekPlan,
    pub exclusions: Exclusions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filters(&mut self, day: Day, filters: Filters) {
        self.plan[day].filters = filters;
    }

    pub fn set_headcount(&mut self, day: Day, headcount: Headcount) {
        self.plan[day].headcount = headcount;
    }

    /// Drops assignments, exclusions and dietary flags, keeping filters and headcounts.
    pub fn reset_for_generation(&mut self) {
        for day in Day::all() {
            let assignment = &mut self.plan[day];
            assignment.meal = None;
            assignment.flags = DietaryFlags::default();
        }
        self.exclusions = Exclusions::default();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
