use crate::domain::family::entities::Gender;

#[derive(Debug, Clone)]
pub struct CreateFamilyMemberInput {
    pub full_name: String,
    pub age: Option<i32>,
    pub gender: Gender,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFamilyMemberInput {
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
}
