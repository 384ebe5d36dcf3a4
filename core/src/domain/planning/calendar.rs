use chrono::{Datelike, Days, NaiveDate};

use crate::domain::planning::entities::PlanView;

/// Days shown by a plan view: Monday to Sunday of the reference week, or every day of the
/// reference month.
pub fn plan_days(view: PlanView, reference: NaiveDate) -> Vec<NaiveDate> {
    let (first, count) = match view {
        PlanView::Weekly => {
            let offset = reference.weekday().num_days_from_monday();
            (reference - Days::new(u64::from(offset)), 7)
        }
        PlanView::Monthly => {
            let first = reference.with_day(1).unwrap_or(reference);
            (first, days_in_month(first))
        }
    };

    first.iter_days().take(count).collect()
}

fn days_in_month(first: NaiveDate) -> usize {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };

    next.map(|next| (next - first).num_days() as usize)
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn weekly_view_starts_on_monday() {
        // Thursday
        let days = plan_days(PlanView::Weekly, date("2025-03-13"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date("2025-03-10"));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6], date("2025-03-16"));
    }

    #[test]
    fn weekly_view_on_sunday_stays_in_that_week() {
        let days = plan_days(PlanView::Weekly, date("2025-03-16"));
        assert_eq!(days[0], date("2025-03-10"));
    }

    #[test]
    fn monthly_view_covers_the_month() {
        assert_eq!(plan_days(PlanView::Monthly, date("2024-02-17")).len(), 29);
        assert_eq!(plan_days(PlanView::Monthly, date("2025-02-01")).len(), 28);

        let december = plan_days(PlanView::Monthly, date("2025-12-25"));
        assert_eq!(december.len(), 31);
        assert_eq!(december[0], date("2025-12-01"));
        assert_eq!(december[30], date("2025-12-31"));
    }
}
