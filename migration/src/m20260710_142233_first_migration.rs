use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table("users")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(string_uniq("username"))
                    .col(string_uniq("email"))
                    .col(string("full_name"))
                    .col(string_null("avatar_url"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // projects
        manager
            .create_table(
                Table::create()
                    .table("projects")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(string("name"))
                    .col(string_uniq("key"))
                    .col(text_null("description"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp("updated_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // sprints
        manager
            .create_table(
                Table::create()
                    .table("sprints")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(integer("project_id"))
                    .col(string("name"))
                    .col(text_null("goal"))
                    .col(timestamp("start_date"))
                    .col(timestamp("end_date"))
                    .col(string("status"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sprints_projects")
                            .from("sprints", "project_id")
                            .to("projects", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // tasks
        manager
            .create_table(
                Table::create()
                    .table("tasks")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(integer("project_id"))
                    .col(integer_null("sprint_id"))
                    .col(string("title"))
                    .col(text_null("description"))
                    .col(string("task_type"))
                    .col(string("status"))
                    .col(string("priority"))
                    .col(integer_null("story_points"))
                    .col(integer_null("assigned_to"))
                    .col(integer("created_by"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp("updated_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_null("due_date"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_projects")
                            .from("tasks", "project_id")
                            .to("projects", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_sprints")
                            .from("tasks", "sprint_id")
                            .to("sprints", "id"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_assignee")
                            .from("tasks", "assigned_to")
                            .to("users", "id"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_creator")
                            .from("tasks", "created_by")
                            .to("users", "id"),
                    )
                    .to_owned(),
            )
            .await?;

        // comments
        manager
            .create_table(
                Table::create()
                    .table("comments")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(integer("task_id"))
                    .col(integer("user_id"))
                    .col(text("content"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp("updated_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_tasks")
                            .from("comments", "task_id")
                            .to("tasks", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_users")
                            .from("comments", "user_id")
                            .to("users", "id"),
                    )
                    .to_owned(),
            )
            .await?;

        // activity_logs
        manager
            .create_table(
                Table::create()
                    .table("activity_logs")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(integer("task_id"))
                    .col(integer("user_id"))
                    .col(string("action"))
                    .col(string_null("field_changed"))
                    .col(string_null("old_value"))
                    .col(string_null("new_value"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_logs_tasks")
                            .from("activity_logs", "task_id")
                            .to("tasks", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_logs_users")
                            .from("activity_logs", "user_id")
                            .to("users", "id"),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("activity_logs").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("comments").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("tasks").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("sprints").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("projects").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("users").to_owned())
            .await?;

        Ok(())
    }
}
