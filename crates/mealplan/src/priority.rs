use mealroll_shared::Day;
use mealroll_shared::mealplan::{Filter, Filters, WeekPlan};

/// Scarcity rank of a filter combination, 1 being the scarcest.
pub fn filter_priority(filters: &Filters) -> u8 {
    let vegan = filters.contains(Filter::Vegan);
    let veggie = filters.contains(Filter::Veggie);
    let quick = filters.contains(Filter::Quick);

    match (vegan, veggie, quick) {
        (true, _, true) => 1,
        (true, _, false) => 2,
        (false, true, true) => 3,
        (false, true, false) => 4,
        (false, false, true) => 5,
        (false, false, false) => 6,
    }
}

/// Days sorted by ascending [`filter_priority`], ties kept in week order.
pub fn priority_order(plan: &WeekPlan) -> Vec<Day> {
    let mut days = Day::all().collect::<Vec<_>>();
    days.sort_by_key(|day| filter_priority(&plan[*day].filters));

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(f: &[Filter]) -> Filters {
        Filters::new(f.iter().copied())
    }

    #[test]
    fn test_rank_table() {
        assert_eq!(filter_priority(&filters(&[Filter::Vegan, Filter::Quick])), 1);
        assert_eq!(
            filter_priority(&filters(&[Filter::Vegan, Filter::Veggie, Filter::Quick])),
            1
        );
        assert_eq!(filter_priority(&filters(&[Filter::Vegan])), 2);
        assert_eq!(filter_priority(&filters(&[Filter::Vegan, Filter::Veggie])), 2);
        assert_eq!(filter_priority(&filters(&[Filter::Veggie, Filter::Quick])), 3);
        assert_eq!(filter_priority(&filters(&[Filter::Veggie])), 4);
        assert_eq!(filter_priority(&filters(&[Filter::Quick])), 5);
        assert_eq!(filter_priority(&filters(&[])), 6);
        assert_eq!(filter_priority(&filters(&[Filter::Skip])), 6);
        assert_eq!(filter_priority(&filters(&[Filter::Skip, Filter::Vegan])), 2);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let mut plan = WeekPlan::default();
        plan[Day::Tuesday].filters = filters(&[Filter::Veggie]);
        plan[Day::Friday].filters = filters(&[Filter::Vegan, Filter::Quick]);
        plan[Day::Sunday].filters = filters(&[Filter::Veggie]);
        plan[Day::Monday].filters = filters(&[Filter::Quick]);

        assert_eq!(
            priority_order(&plan),
            vec![
                Day::Friday,
                Day::Tuesday,
                Day::Sunday,
                Day::Monday,
                Day::Wednesday,
                Day::Thursday,
                Day::Saturday,
            ]
        );
    }

    #[test]
    fn test_vegan_quick_before_veggie() {
        let mut plan = WeekPlan::default();
        plan[Day::Monday].filters = filters(&[Filter::Veggie]);
        plan[Day::Sunday].filters = filters(&[Filter::Vegan, Filter::Quick]);

        let order = priority_order(&plan);
        let sunday = order.iter().position(|d| *d == Day::Sunday).unwrap();
        let monday = order.iter().position(|d| *d == Day::Monday).unwrap();
        assert!(sunday < monday);
    }
}
