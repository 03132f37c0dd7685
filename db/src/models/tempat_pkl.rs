use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, QuerySelect, SqlErr, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::student;

/// An internship (PKL) placement location.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "tempat_pkl")]
pub struct Model {
    /// Server-generated UUID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Contact person at the placement.
    pub contact_name: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Failures surfaced by the placement write paths.
#[derive(Debug, thiserror::Error)]
pub enum TempatPklError {
    #[error("Tempat PKL {0} not found")]
    NotFound(String),

    #[error("Tempat PKL still has assigned students")]
    HasAssignedStudents,

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// Writable fields of a placement, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct TempatPklFields {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
}

/// A placement together with the number of students referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct WithStudentCount {
    pub tempat_pkl: Model,
    pub student_count: u64,
}

impl Model {
    /// All placements ordered by name, each annotated with its student count.
    pub async fn list_with_student_counts(db: &DbConn) -> Result<Vec<WithStudentCount>, DbErr> {
        let locations = Entity::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        let counts: HashMap<String, i64> = student::Entity::find()
            .select_only()
            .column(student::Column::TempatPklId)
            .column_as(Expr::col(student::Column::Id).count(), "student_count")
            .filter(student::Column::TempatPklId.is_not_null())
            .group_by(student::Column::TempatPklId)
            .into_tuple::<(String, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        Ok(locations
            .into_iter()
            .map(|tempat_pkl| {
                let student_count = counts.get(&tempat_pkl.id).copied().unwrap_or(0) as u64;
                WithStudentCount {
                    tempat_pkl,
                    student_count,
                }
            })
            .collect())
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    pub async fn create(db: &DbConn, fields: TempatPklFields) -> Result<Model, DbErr> {
        let now = Utc::now();
        let tempat_pkl = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(fields.name),
            address: Set(fields.address),
            phone: Set(fields.phone),
            email: Set(fields.email),
            contact_name: Set(fields.contact_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        tempat_pkl.insert(db).await
    }

    /// Replaces every writable field of an existing placement.
    ///
    /// Optional fields absent from `fields` are cleared.
    pub async fn update(
        db: &DbConn,
        id: &str,
        fields: TempatPklFields,
    ) -> Result<WithStudentCount, TempatPklError> {
        let existing = Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| TempatPklError::NotFound(id.to_owned()))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.address = Set(fields.address);
        active.phone = Set(fields.phone);
        active.email = Set(fields.email);
        active.contact_name = Set(fields.contact_name);
        active.updated_at = Set(Utc::now());

        let tempat_pkl = active.update(db).await?;
        let student_count = student::Model::count_by_tempat_pkl(db, id).await?;

        Ok(WithStudentCount {
            tempat_pkl,
            student_count,
        })
    }

    /// Deletes a placement that no student references.
    ///
    /// The reference check and the delete share one transaction; the
    /// `RESTRICT` foreign key on `students.tempat_pkl_id` backs it up.
    pub async fn delete(db: &DbConn, id: &str) -> Result<(), TempatPklError> {
        let txn = db.begin().await?;

        if Entity::find_by_id(id.to_owned()).one(&txn).await?.is_none() {
            return Err(TempatPklError::NotFound(id.to_owned()));
        }

        let assigned = student::Model::count_by_tempat_pkl(&txn, id).await?;
        if assigned > 0 {
            tracing::warn!(tempat_pkl_id = %id, assigned, "Refusing to delete placement in use");
            return Err(TempatPklError::HasAssignedStudents);
        }

        Entity::delete_by_id(id.to_owned())
            .exec(&txn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    TempatPklError::HasAssignedStudents
                }
                _ => TempatPklError::Db(e),
            })?;

        txn.commit().await?;
        Ok(())
    }
}
