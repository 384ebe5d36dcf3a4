use crate::{domain::household::entities::Household, entity::households};

impl From<&households::Model> for Household {
    fn from(model: &households::Model) -> Self {
        Self {
            id: model.id,
            owner_ref: model.owner_ref.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<households::Model> for Household {
    fn from(model: households::Model) -> Self {
        Self::from(&model)
    }
}
