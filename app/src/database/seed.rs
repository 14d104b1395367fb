use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
};
use tracing::info;

use crate::models::{
    project, sprint,
    sprint::SprintStatus,
    task,
    task::{TaskPriority, TaskStatus},
    user,
};

/// Seeds demo data on a fresh database. Keyed off the users table so a
/// restart against a populated database inserts nothing.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let user_count = user::Entity::find().count(db).await?;
    if user_count > 0 {
        info!("Demo data already present");
        return Ok(());
    }

    let now = Utc::now().naive_utc();

    let john = user::ActiveModel {
        username: Set("john_doe".to_string()),
        email: Set("john@example.com".to_string()),
        full_name: Set("John Doe".to_string()),
        avatar_url: Set(Some("https://i.pravatar.cc/150?img=1".to_string())),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let jane = user::ActiveModel {
        username: Set("jane_smith".to_string()),
        email: Set("jane@example.com".to_string()),
        full_name: Set("Jane Smith".to_string()),
        avatar_url: Set(Some("https://i.pravatar.cc/150?img=2".to_string())),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let bob = user::ActiveModel {
        username: Set("bob_wilson".to_string()),
        email: Set("bob@example.com".to_string()),
        full_name: Set("Bob Wilson".to_string()),
        avatar_url: Set(Some("https://i.pravatar.cc/150?img=3".to_string())),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let project = project::ActiveModel {
        name: Set("Taskboard".to_string()),
        key: Set("TBD".to_string()),
        description: Set(Some(
            "Task management system for development teams".to_string(),
        )),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let sprint = sprint::ActiveModel {
        project_id: Set(project.id),
        name: Set("Sprint 1".to_string()),
        goal: Set(Some("Build core features".to_string())),
        start_date: Set(now),
        end_date: Set(now + Duration::days(14)),
        status: Set(SprintStatus::Active),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let demo_task = |sprint_id: Option<i32>,
                     title: &str,
                     description: &str,
                     task_type: &str,
                     status: TaskStatus,
                     priority: TaskPriority,
                     story_points: Option<i32>,
                     assigned_to: Option<i32>,
                     created_by: i32| task::ActiveModel {
        project_id: Set(project.id),
        sprint_id: Set(sprint_id),
        title: Set(title.to_string()),
        description: Set(Some(description.to_string())),
        task_type: Set(task_type.to_string()),
        status: Set(status),
        priority: Set(priority),
        story_points: Set(story_points),
        assigned_to: Set(assigned_to),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let tasks = vec![
        demo_task(
            Some(sprint.id),
            "Setup project infrastructure",
            "Initialize the server and database scaffolding",
            "task",
            TaskStatus::Done,
            TaskPriority::High,
            Some(5),
            Some(john.id),
            john.id,
        ),
        demo_task(
            Some(sprint.id),
            "Create database models",
            "Define entities for all board resources",
            "task",
            TaskStatus::Done,
            TaskPriority::High,
            Some(3),
            Some(john.id),
            john.id,
        ),
        demo_task(
            Some(sprint.id),
            "Build Kanban board",
            "Implement drag-and-drop task board",
            "story",
            TaskStatus::InProgress,
            TaskPriority::High,
            Some(8),
            Some(jane.id),
            john.id,
        ),
        demo_task(
            Some(sprint.id),
            "Add task filtering",
            "Allow users to filter tasks by status and assignee",
            "story",
            TaskStatus::Todo,
            TaskPriority::Medium,
            Some(5),
            Some(jane.id),
            john.id,
        ),
        demo_task(
            Some(sprint.id),
            "Fix bug in task assignment",
            "Tasks not updating when assigned to users",
            "bug",
            TaskStatus::InReview,
            TaskPriority::High,
            Some(2),
            Some(bob.id),
            jane.id,
        ),
        demo_task(
            None,
            "Design sprint planning view",
            "Create UI mockups for sprint planning",
            "story",
            TaskStatus::Todo,
            TaskPriority::Medium,
            Some(5),
            None,
            john.id,
        ),
        demo_task(
            None,
            "Implement user authentication",
            "Add JWT-based authentication",
            "story",
            TaskStatus::Todo,
            TaskPriority::High,
            Some(8),
            None,
            john.id,
        ),
    ];
    let task_count = tasks.len();
    task::Entity::insert_many(tasks).exec(db).await?;

    info!(
        "Seeded demo data: 3 users, 1 project, 1 sprint, {} tasks",
        task_count
    );

    Ok(())
}
