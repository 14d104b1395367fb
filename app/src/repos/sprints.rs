use chrono::Utc;
use sea_orm::{
    prelude::DateTime, ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use serde::Deserialize;

use crate::{
    models::sprint::{self, ActiveModel, Entity as SprintEntity, Model as Sprint, SprintStatus},
    utils::patch::patch_field,
};

#[derive(Debug, Deserialize)]
pub struct CreateSprint {
    pub project_id: i32,
    pub name: String,
    pub goal: Option<String>,
    pub start_date: DateTime,
    pub end_date: DateTime,
    #[serde(default)]
    pub status: SprintStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSprint {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub goal: Option<Option<String>>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub status: Option<SprintStatus>,
}

pub struct SprintsRepo {
    db: DatabaseConnection,
}

impl SprintsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, project_id: Option<i32>) -> Result<Vec<Sprint>, DbErr> {
        let mut query = SprintEntity::find();
        if let Some(project_id) = project_id {
            query = query.filter(sprint::Column::ProjectId.eq(project_id));
        }
        let sprints = query.all(&self.db).await?;

        Ok(sprints)
    }

    pub async fn get(&self, sprint_id: i32) -> Result<Sprint, DbErr> {
        let sprint = SprintEntity::find_by_id(sprint_id).one(&self.db).await?;

        match sprint {
            Some(s) => Ok(s),
            None => Err(DbErr::RecordNotFound(format!(
                "Sprint with id: {} not found",
                sprint_id
            ))),
        }
    }

    pub async fn create(&self, input: CreateSprint) -> Result<Sprint, DbErr> {
        let sprint_model = ActiveModel {
            project_id: Set(input.project_id),
            name: Set(input.name),
            goal: Set(input.goal),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            status: Set(input.status),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let sprint = sprint_model.insert(&self.db).await?;

        Ok(sprint)
    }

    pub async fn update(&self, sprint_id: i32, changes: UpdateSprint) -> Result<Sprint, DbErr> {
        let sprint = self.get(sprint_id).await?;

        let mut model: ActiveModel = sprint.clone().into();
        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(goal) = changes.goal {
            model.goal = Set(goal);
        }
        if let Some(start_date) = changes.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(status) = changes.status {
            model.status = Set(status);
        }
        if !model.is_changed() {
            return Ok(sprint);
        }
        let updated = model.update(&self.db).await?;

        Ok(updated)
    }

    pub async fn set_status(&self, sprint_id: i32, status: SprintStatus) -> Result<Sprint, DbErr> {
        let sprint = self.get(sprint_id).await?;

        let mut sprint: ActiveModel = sprint.into();
        sprint.status = Set(status);
        let updated_sprint = sprint.update(&self.db).await?;

        Ok(updated_sprint)
    }
}
