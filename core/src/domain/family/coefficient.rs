//! Household consumption coefficient.
//!
//! Recipe quantities are written for one adult portion; the coefficient says how many
//! adult portions the household eats. Each member weighs 1.0, less for children, and is
//! nudged by gender. A member whose age is unknown counts as an adult.

use crate::domain::{
    common::round2,
    family::entities::{FamilyMember, Gender},
};

const ADULT_WEIGHT: f64 = 1.0;
const TODDLER_WEIGHT: f64 = 0.5;
const CHILD_WEIGHT: f64 = 0.7;
const TEEN_WEIGHT: f64 = 0.9;
const GENDER_ADJUSTMENT: f64 = 0.1;

pub fn member_weight(age: Option<i32>, gender: Gender) -> f64 {
    let base = match age {
        Some(age) if age <= 5 => TODDLER_WEIGHT,
        Some(age) if age <= 12 => CHILD_WEIGHT,
        Some(age) if age < 18 => TEEN_WEIGHT,
        _ => ADULT_WEIGHT,
    };

    match gender {
        Gender::Male => base + GENDER_ADJUSTMENT,
        Gender::Female => base - GENDER_ADJUSTMENT,
        Gender::Other => base,
    }
}

/// Sum of member weights, rounded to two decimals. An empty household yields 0.
pub fn compute_coefficient(members: &[FamilyMember]) -> f64 {
    let total: f64 = members
        .iter()
        .map(|member| member_weight(member.age, member.gender))
        .sum();

    round2(total)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::family::entities::FamilyMemberConfig;

    fn member(age: Option<i32>, gender: Gender) -> FamilyMember {
        FamilyMember::new(FamilyMemberConfig {
            household_id: Uuid::new_v4(),
            full_name: "Membre".to_string(),
            age,
            gender,
            email: None,
        })
    }

    #[test]
    fn empty_household_is_zero() {
        assert_eq!(compute_coefficient(&[]), 0.0);
    }

    #[test]
    fn adult_men_weigh_one_point_one() {
        for count in 1..=6 {
            let members: Vec<_> = (0..count)
                .map(|i| member(Some(18 + i * 7), Gender::Male))
                .collect();
            assert_eq!(compute_coefficient(&members), round2(1.1 * count as f64));
        }
    }

    #[test]
    fn adult_women_weigh_zero_point_nine() {
        for count in 1..=6 {
            let members: Vec<_> = (0..count)
                .map(|i| member(Some(18 + i * 9), Gender::Female))
                .collect();
            assert_eq!(compute_coefficient(&members), round2(0.9 * count as f64));
        }
    }

    #[test]
    fn toddler_boy() {
        assert_eq!(compute_coefficient(&[member(Some(3), Gender::Male)]), 0.6);
    }

    #[test]
    fn school_age_girl() {
        assert_eq!(compute_coefficient(&[member(Some(10), Gender::Female)]), 0.6);
    }

    #[test]
    fn age_band_boundaries() {
        assert_eq!(member_weight(Some(0), Gender::Other), 0.5);
        assert_eq!(member_weight(Some(5), Gender::Other), 0.5);
        assert_eq!(member_weight(Some(6), Gender::Other), 0.7);
        assert_eq!(member_weight(Some(12), Gender::Other), 0.7);
        assert_eq!(member_weight(Some(13), Gender::Other), 0.9);
        assert_eq!(member_weight(Some(17), Gender::Other), 0.9);
        assert_eq!(member_weight(Some(18), Gender::Other), 1.0);
    }

    #[test]
    fn unknown_age_keeps_adult_base_with_gender_adjustment() {
        assert_eq!(compute_coefficient(&[member(None, Gender::Other)]), 1.0);
        assert_eq!(compute_coefficient(&[member(None, Gender::Female)]), 0.9);
        assert_eq!(compute_coefficient(&[member(None, Gender::Male)]), 1.1);
    }

    #[test]
    fn mixed_family_is_rounded() {
        let members = vec![
            member(Some(40), Gender::Male),
            member(Some(38), Gender::Female),
            member(Some(14), Gender::Female),
            member(Some(4), Gender::Male),
        ];
        // 1.1 + 0.9 + 0.8 + 0.6
        assert_eq!(compute_coefficient(&members), 3.4);
    }
}
