use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
};
use serde::Deserialize;

use crate::models::task::{self, Entity as TaskEntity, Model as Task, TaskStatus};

#[derive(Debug, Deserialize)]
pub struct TaskFilter {
    pub project_id: Option<i32>,
    pub sprint_id: Option<i32>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<i32>,
}

pub struct TasksRepo {
    pub db: DatabaseConnection,
}

impl TasksRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, task_id: i32) -> Result<Task, DbErr> {
        let task = TaskEntity::find_by_id(task_id).one(&self.db).await?;

        match task {
            Some(t) => Ok(t),
            None => Err(DbErr::RecordNotFound(format!(
                "Task with id: {} not found",
                task_id
            ))),
        }
    }

    pub async fn get_filtered(&self, filter: TaskFilter) -> Result<Vec<Task>, DbErr> {
        let mut query = TaskEntity::find();
        if let Some(project_id) = filter.project_id {
            query = query.filter(task::Column::ProjectId.eq(project_id));
        }
        if let Some(sprint_id) = filter.sprint_id {
            query = query.filter(task::Column::SprintId.eq(sprint_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(task::Column::Status.eq(status));
        }
        if let Some(assigned_to) = filter.assigned_to {
            query = query.filter(task::Column::AssignedTo.eq(assigned_to));
        }
        let tasks = query.all(&self.db).await?;

        Ok(tasks)
    }

    /// Comments and activity logs go with the task via FK cascade.
    pub async fn delete(&self, task_id: i32) -> Result<(), DbErr> {
        let task = self.get(task_id).await?;
        task.delete(&self.db).await?;

        Ok(())
    }
}
