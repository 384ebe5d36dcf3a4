use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const IMMINENT_DAYS: i64 = 2;
const SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpirationStatus {
    Expired,
    Imminent,
    Soon,
    Fresh,
}

pub fn days_until(expiration_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiration_date - today).num_days()
}

/// `None` for items without an expiration date.
pub fn expiration_status(
    expiration_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<ExpirationStatus> {
    let days = days_until(expiration_date?, today);

    Some(match days {
        d if d <= 0 => ExpirationStatus::Expired,
        d if d <= IMMINENT_DAYS => ExpirationStatus::Imminent,
        d if d <= SOON_DAYS => ExpirationStatus::Soon,
        _ => ExpirationStatus::Fresh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn status_bands() {
        let today = date("2025-03-10");

        assert_eq!(expiration_status(None, today), None);
        assert_eq!(
            expiration_status(Some(date("2025-03-01")), today),
            Some(ExpirationStatus::Expired)
        );
        assert_eq!(
            expiration_status(Some(today), today),
            Some(ExpirationStatus::Expired)
        );
        assert_eq!(
            expiration_status(Some(date("2025-03-11")), today),
            Some(ExpirationStatus::Imminent)
        );
        assert_eq!(
            expiration_status(Some(date("2025-03-12")), today),
            Some(ExpirationStatus::Imminent)
        );
        assert_eq!(
            expiration_status(Some(date("2025-03-13")), today),
            Some(ExpirationStatus::Soon)
        );
        assert_eq!(
            expiration_status(Some(date("2025-03-17")), today),
            Some(ExpirationStatus::Soon)
        );
        assert_eq!(
            expiration_status(Some(date("2025-03-18")), today),
            Some(ExpirationStatus::Fresh)
        );
    }

    #[test]
    fn days_until_crosses_months() {
        assert_eq!(days_until(date("2025-03-02"), date("2025-02-27")), 3);
    }
}
