use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "proposition_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub proposition_id: Uuid,
    pub sender_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::propositions::Entity",
        from = "Column::PropositionId",
        to = "super::propositions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Propositions,
}

impl Related<super::propositions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Propositions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
