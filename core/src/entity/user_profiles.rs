use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub age: i32,
    pub height_cm: f64,
    pub weight: f64,
    pub weight_unit: String,
    pub sex: String,
    pub diabetes: bool,
    pub high_bp: bool,
    pub high_cholesterol: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub low_sodium: bool,
    pub low_carb: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
