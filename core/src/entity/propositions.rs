use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "propositions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub household_id: Uuid,
    pub client_name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: Json,
    pub status: String,
    pub vendor_id: Option<Uuid>,
    pub accepted_at: Option<DateTimeWithTimeZone>,
    pub delivered_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::proposition_messages::Entity")]
    PropositionMessages,
}

impl Related<super::proposition_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropositionMessages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
