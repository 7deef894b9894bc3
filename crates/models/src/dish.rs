use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection, QueryOrder, QuerySelect};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dish")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cuisine: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    /// Insertion counter assigned by the database.
    pub seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Trimmed, validated fields of a dish that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
}

impl DishFields {
    /// Trim every field; `name` must be non-empty afterwards, blank optionals become `None`.
    pub fn parse(
        name: Option<&str>,
        description: Option<&str>,
        cuisine: Option<&str>,
    ) -> Result<Self, errors::ModelError> {
        Ok(Self {
            name: validate_name(name)?,
            description: trim_optional(description),
            cuisine: trim_optional(cuisine),
        })
    }
}

pub fn validate_name(name: Option<&str>) -> Result<String, errors::ModelError> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(errors::ModelError::Validation("name is required".into())),
    }
}

pub fn trim_optional(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn active_model(fields: DishFields) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields.name),
        description: Set(fields.description),
        cuisine: Set(fields.cuisine),
        created_at: Set(Utc::now().into()),
        seq: NotSet,
    }
}

pub async fn create(db: &DatabaseConnection, fields: DishFields) -> Result<Model, errors::ModelError> {
    Ok(active_model(fields).insert(db).await?)
}

/// Insert several dishes in one statement; returns the number of rows written.
pub async fn create_many(db: &DatabaseConnection, all: Vec<DishFields>) -> Result<u64, errors::ModelError> {
    if all.is_empty() {
        return Ok(0);
    }
    let rows = Entity::insert_many(all.into_iter().map(active_model))
        .exec_without_returning(db)
        .await?;
    Ok(rows)
}

pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Seq)
        .all(db)
        .await?)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}

/// Dish at `offset` when enumerating by ascending id.
pub async fn find_at_offset(db: &DatabaseConnection, offset: u64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(1)
        .one(db)
        .await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}
