use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::models::activity_log::{
    self, ActiveModel, ActivityAction, Entity as ActivityLogEntity, Model as ActivityLog,
};

/// One loggable mutation, already shaped by the caller: falsy old/new values
/// (empty string, zero, absent) must arrive here as `None`.
#[derive(Debug)]
pub struct NewActivity {
    pub task_id: i32,
    pub user_id: i32,
    pub action: ActivityAction,
    pub field_changed: Option<&'static str>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

pub struct ActivityLogsRepo {
    db: DatabaseConnection,
}

impl ActivityLogsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit entry on whatever connection the caller provides,
    /// so the entry commits or rolls back with the caller's transaction.
    pub async fn record<C>(conn: &C, entry: NewActivity) -> Result<ActivityLog, DbErr>
    where
        C: ConnectionTrait,
    {
        let log_model = ActiveModel {
            task_id: Set(entry.task_id),
            user_id: Set(entry.user_id),
            action: Set(entry.action),
            field_changed: Set(entry.field_changed.map(|f| f.to_string())),
            old_value: Set(entry.old_value),
            new_value: Set(entry.new_value),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let log = log_model.insert(conn).await?;

        Ok(log)
    }

    pub async fn get_all_for_task(&self, task_id: i32) -> Result<Vec<ActivityLog>, DbErr> {
        let logs = ActivityLogEntity::find()
            .filter(activity_log::Column::TaskId.eq(task_id))
            .order_by_asc(activity_log::Column::CreatedAt)
            .order_by_asc(activity_log::Column::Id)
            .all(&self.db)
            .await?;

        Ok(logs)
    }
}
