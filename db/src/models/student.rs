use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student record. Only the placement reference matters to this service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,
    pub tempat_pkl_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tempat_pkl::Entity",
        from = "Column::TempatPklId",
        to = "super::tempat_pkl::Column::Id",
        on_delete = "Restrict"
    )]
    TempatPkl,
}

impl Related<super::tempat_pkl::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TempatPkl.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        tempat_pkl_id: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let student = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            tempat_pkl_id: Set(tempat_pkl_id.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        student.insert(db).await
    }

    /// Number of students placed at the given location.
    pub async fn count_by_tempat_pkl<C>(db: &C, tempat_pkl_id: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::TempatPklId.eq(tempat_pkl_id))
            .count(db)
            .await
    }
}
