use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

use taskboard::models::activity_log::{self, ActivityAction};
use taskboard::models::comment;
use taskboard::models::task::{self, TaskPriority, TaskStatus};
use taskboard::services::tasks::{self, CreateComment, CreateTask, MoveTask, UpdateTask};

fn task_row(status: TaskStatus, assigned_to: Option<i32>) -> task::Model {
    let now = Utc::now().naive_utc();
    task::Model {
        id: 1,
        project_id: 1,
        sprint_id: Some(2),
        title: "Build Kanban board".to_string(),
        description: Some("Implement drag-and-drop task board".to_string()),
        task_type: "story".to_string(),
        status,
        priority: TaskPriority::High,
        story_points: Some(8),
        assigned_to,
        created_by: 1,
        created_at: now,
        updated_at: now,
        due_date: None,
    }
}

fn activity_row(
    action: ActivityAction,
    field_changed: Option<&str>,
    old_value: Option<&str>,
    new_value: Option<&str>,
) -> activity_log::Model {
    activity_log::Model {
        id: 1,
        task_id: 1,
        user_id: 1,
        action,
        field_changed: field_changed.map(str::to_string),
        old_value: old_value.map(str::to_string),
        new_value: new_value.map(str::to_string),
        created_at: Utc::now().naive_utc(),
    }
}

fn exec_ok() -> MockExecResult {
    MockExecResult {
        last_insert_id: 1,
        rows_affected: 1,
    }
}

#[tokio::test]
async fn test_update_task_fails_with_not_found_for_missing_task() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<task::Model>::new()])
        .into_connection();

    let changes = UpdateTask {
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    };
    let result = tasks::update_task(&db, 42, changes).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}

#[tokio::test]
async fn test_add_comment_fails_with_not_found_and_writes_nothing() {
    // Only the task lookup has a prepared result; any attempted insert
    // would fail the mock, so NotFound here proves nothing was written.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<task::Model>::new()])
        .into_connection();

    let result = tasks::add_comment(
        &db,
        42,
        CreateComment {
            user_id: 3,
            content: "looks good".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}

#[tokio::test]
async fn test_assign_task_writes_log_even_when_assignee_is_unchanged() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![activity_row(
            ActivityAction::Assigned,
            Some("assigned_to"),
            Some("5"),
            Some("5"),
        )]])
        .append_exec_results([exec_ok(), exec_ok()])
        .into_connection();

    let assigned = tasks::assign_task(&db, 1, 5).await.unwrap();

    assert_eq!(assigned.assigned_to, Some(5));
}

#[tokio::test]
async fn test_update_task_commits_task_and_log_together() {
    let updated = task_row(TaskStatus::InProgress, Some(5));
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![updated.clone()]])
        .append_query_results([vec![activity_row(
            ActivityAction::Updated,
            Some("status"),
            Some("todo"),
            Some("in_progress"),
        )]])
        .append_exec_results([exec_ok(), exec_ok()])
        .into_connection();

    let changes = UpdateTask {
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    };
    let result = tasks::update_task(&db, 1, changes).await.unwrap();

    assert_eq!(result.status, TaskStatus::InProgress);
}

#[tokio::test]
async fn test_update_task_with_unchanged_value_writes_no_log() {
    // Results cover the lookup and the idempotent task update only; an
    // unexpected activity insert would error out the mock.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_exec_results([exec_ok()])
        .into_connection();

    let changes = UpdateTask {
        status: Some(TaskStatus::Todo),
        ..Default::default()
    };
    let result = tasks::update_task(&db, 1, changes).await.unwrap();

    assert_eq!(result.status, TaskStatus::Todo);
}

#[tokio::test]
async fn test_update_task_with_empty_change_set_is_a_read_only_noop() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .into_connection();

    let result = tasks::update_task(&db, 1, UpdateTask::default()).await.unwrap();

    assert_eq!(result.id, 1);
}

#[tokio::test]
async fn test_move_task_with_both_fields_writes_two_logs() {
    let mut moved = task_row(TaskStatus::Done, Some(5));
    moved.sprint_id = Some(3);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![moved.clone()]])
        .append_query_results([vec![activity_row(
            ActivityAction::Moved,
            Some("status"),
            Some("todo"),
            Some("done"),
        )]])
        .append_query_results([vec![activity_row(
            ActivityAction::Moved,
            Some("sprint_id"),
            Some("2"),
            Some("3"),
        )]])
        .append_exec_results([exec_ok(), exec_ok(), exec_ok()])
        .into_connection();

    let move_req = MoveTask {
        status: Some(TaskStatus::Done),
        sprint_id: Some(3),
    };
    let result = tasks::move_task(&db, 1, move_req).await.unwrap();

    assert_eq!(result.status, TaskStatus::Done);
    assert_eq!(result.sprint_id, Some(3));
}

#[tokio::test]
async fn test_create_task_inserts_task_and_created_log() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, None)]])
        .append_query_results([vec![activity_row(ActivityAction::Created, None, None, None)]])
        .append_exec_results([exec_ok(), exec_ok()])
        .into_connection();

    let input = CreateTask {
        project_id: 1,
        sprint_id: Some(2),
        title: "Build Kanban board".to_string(),
        description: Some("Implement drag-and-drop task board".to_string()),
        task_type: "story".to_string(),
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        story_points: Some(8),
        assigned_to: None,
        due_date: None,
        created_by: 1,
    };
    let task = tasks::create_task(&db, input).await.unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.created_by, 1);
}

#[tokio::test]
async fn test_add_comment_inserts_comment_and_commented_log() {
    let now = Utc::now().naive_utc();
    let comment = comment::Model {
        id: 1,
        task_id: 1,
        user_id: 3,
        content: "looks good".to_string(),
        created_at: now,
        updated_at: now,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![task_row(TaskStatus::Todo, Some(5))]])
        .append_query_results([vec![comment.clone()]])
        .append_query_results([vec![activity_row(
            ActivityAction::Commented,
            None,
            None,
            None,
        )]])
        .append_exec_results([exec_ok(), exec_ok()])
        .into_connection();

    let result = tasks::add_comment(
        &db,
        1,
        CreateComment {
            user_id: 3,
            content: "looks good".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(result.task_id, 1);
    assert_eq!(result.user_id, 3);
}
