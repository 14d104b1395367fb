use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};
use serde::Deserialize;

use crate::{
    models::project::{self, ActiveModel, Entity as ProjectEntity, Model as Project},
    utils::patch::patch_field,
};

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub key: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub description: Option<Option<String>>,
}

pub struct ProjectsRepo {
    db: DatabaseConnection,
}

impl ProjectsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let projects = ProjectEntity::find().all(&self.db).await?;

        Ok(projects)
    }

    pub async fn get(&self, project_id: i32) -> Result<Project, DbErr> {
        let project = ProjectEntity::find_by_id(project_id).one(&self.db).await?;

        match project {
            Some(p) => Ok(p),
            None => Err(DbErr::RecordNotFound(format!(
                "Project with id: {} not found",
                project_id
            ))),
        }
    }

    pub async fn get_by_key(&self, key: &str) -> Result<Option<Project>, DbErr> {
        let project = ProjectEntity::find()
            .filter(project::Column::Key.eq(key))
            .one(&self.db)
            .await?;

        Ok(project)
    }

    pub async fn create(
        &self,
        name: String,
        key: String,
        description: Option<String>,
    ) -> Result<Project, DbErr> {
        let now = Utc::now().naive_utc();

        let project_model = ActiveModel {
            name: Set(name),
            key: Set(key),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let project = project_model.insert(&self.db).await?;

        Ok(project)
    }

    pub async fn update(&self, project_id: i32, changes: UpdateProject) -> Result<Project, DbErr> {
        let project = self.get(project_id).await?;

        let mut model: ActiveModel = project.clone().into();
        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(key) = changes.key {
            model.key = Set(key);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if !model.is_changed() {
            return Ok(project);
        }
        model.updated_at = Set(Utc::now().naive_utc());
        let updated = model.update(&self.db).await?;

        Ok(updated)
    }

    pub async fn delete(&self, project_id: i32) -> Result<(), DbErr> {
        let project = self.get(project_id).await?;
        project.delete(&self.db).await?;

        Ok(())
    }
}
