use crate::{
    domain::family::entities::{FamilyMember, Gender},
    entity::family_members,
};

impl From<&family_members::Model> for FamilyMember {
    fn from(model: &family_members::Model) -> Self {
        Self {
            id: model.id,
            household_id: model.household_id,
            full_name: model.full_name.clone(),
            age: model.age,
            gender: model.gender.parse().unwrap_or(Gender::Other),
            email: model.email.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<family_members::Model> for FamilyMember {
    fn from(model: family_members::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&FamilyMember> for family_members::ActiveModel {
    fn from(member: &FamilyMember) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(member.id),
            household_id: Set(member.household_id),
            full_name: Set(member.full_name.clone()),
            age: Set(member.age),
            gender: Set(member.gender.as_str().to_string()),
            email: Set(member.email.clone()),
            created_at: Set(member.created_at.fixed_offset()),
            updated_at: Set(member.updated_at.fixed_offset()),
        }
    }
}
