use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::models::user::{Entity as UserEntity, Model as User};

pub struct UsersRepo {
    db: DatabaseConnection,
}

impl UsersRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = UserEntity::find().all(&self.db).await?;

        Ok(users)
    }

    pub async fn get(&self, user_id: i32) -> Result<User, DbErr> {
        let user = UserEntity::find_by_id(user_id).one(&self.db).await?;

        match user {
            Some(u) => Ok(u),
            None => Err(DbErr::RecordNotFound(format!(
                "User with id: {} not found",
                user_id
            ))),
        }
    }
}
