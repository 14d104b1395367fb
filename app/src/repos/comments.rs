use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::models::comment::{self, Entity as CommentEntity, Model as Comment};

pub struct CommentsRepo {
    db: DatabaseConnection,
}

impl CommentsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_for_task(&self, task_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = CommentEntity::find()
            .filter(comment::Column::TaskId.eq(task_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(comments)
    }
}
