use mealwise_core::domain::family::entities::Gender;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Reads an age sent as a number or as text. Text is read up to the first non-digit
/// (`"12 ans"` is 12); anything without leading digits is treated as unknown.
pub fn lenient_age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => parse_leading_int(&s),
        _ => None,
    })
}

fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().ok().map(|n| sign * n)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFamilyMemberValidator {
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "lenient_age")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<i32>,

    #[serde(default = "default_gender")]
    pub gender: Gender,

    #[validate(email(message = "email is invalid"))]
    #[serde(default)]
    pub email: Option<String>,
}

fn default_gender() -> Gender {
    Gender::Other
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFamilyMemberValidator {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_age")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<i32>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[validate(email(message = "email is invalid"))]
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_of(json: &str) -> Option<i32> {
        serde_json::from_str::<CreateFamilyMemberValidator>(json)
            .unwrap()
            .age
    }

    #[test]
    fn ages_are_read_leniently() {
        assert_eq!(age_of(r#"{"full_name":"Awa","age":34}"#), Some(34));
        assert_eq!(age_of(r#"{"full_name":"Awa","age":"12"}"#), Some(12));
        assert_eq!(age_of(r#"{"full_name":"Awa","age":"12 ans"}"#), Some(12));
        assert_eq!(age_of(r#"{"full_name":"Awa","age":7.9}"#), Some(7));
        assert_eq!(age_of(r#"{"full_name":"Awa","age":"douze"}"#), None);
        assert_eq!(age_of(r#"{"full_name":"Awa","age":""}"#), None);
        assert_eq!(age_of(r#"{"full_name":"Awa","age":null}"#), None);
        assert_eq!(age_of(r#"{"full_name":"Awa"}"#), None);
    }

    #[test]
    fn leading_sign_is_kept() {
        assert_eq!(parse_leading_int(" -3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn unknown_gender_is_other() {
        let member: CreateFamilyMemberValidator =
            serde_json::from_str(r#"{"full_name":"Awa","gender":"X"}"#).unwrap();
        assert_eq!(member.gender, Gender::Other);

        let member: CreateFamilyMemberValidator =
            serde_json::from_str(r#"{"full_name":"Moussa","gender":"Homme"}"#).unwrap();
        assert_eq!(member.gender, Gender::Male);
    }

    #[test]
    fn empty_name_fails_validation() {
        let member: CreateFamilyMemberValidator =
            serde_json::from_str(r#"{"full_name":""}"#).unwrap();
        assert!(member.validate().is_err());
    }
}
