use chrono::Utc;
use sea_orm::{
    prelude::DateTime, ActiveEnum, ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr,
    TransactionTrait,
};
use serde::Deserialize;

use crate::{
    models::{
        activity_log::ActivityAction,
        comment::{self, Model as Comment},
        task::{self, Model as Task, TaskPriority, TaskStatus},
    },
    repos::{
        activity_logs::{ActivityLogsRepo, NewActivity},
        tasks::TasksRepo,
    },
    utils::patch::patch_field,
};

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub project_id: i32,
    pub sprint_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub task_type: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub story_points: Option<i32>,
    pub assigned_to: Option<i32>,
    pub due_date: Option<DateTime>,
    pub created_by: i32,
}

/// A partial update. Fields left out of the payload are not touched;
/// nullable fields use the double-`Option` pattern so an explicit `null`
/// clears the column.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub description: Option<Option<String>>,
    pub task_type: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "patch_field")]
    pub story_points: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub assigned_to: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub sprint_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub due_date: Option<Option<DateTime>>,
}

#[derive(Debug, Deserialize)]
pub struct MoveTask {
    pub status: Option<TaskStatus>,
    pub sprint_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AssignTask {
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub user_id: i32,
    pub content: String,
}

/// A field-level difference staged for the audit trail.
#[derive(Debug, Clone, PartialEq)]
struct FieldChange {
    field: &'static str,
    old_value: Option<String>,
    new_value: Option<String>,
}

fn loggable_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn loggable_int(value: Option<i32>) -> Option<String> {
    value.filter(|v| *v != 0).map(|v| v.to_string())
}

fn loggable_date(value: Option<DateTime>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Stages the column updates and audit entries a change set produces against
/// the task's current state. Supplied fields are applied even when unchanged;
/// an audit entry is staged only when the value actually differs, with falsy
/// values recorded as absent.
fn stage_changes(task: &Task, changes: &UpdateTask) -> (task::ActiveModel, Vec<FieldChange>) {
    let mut model: task::ActiveModel = task.clone().into();
    let mut staged = Vec::new();

    if let Some(title) = &changes.title {
        if *title != task.title {
            staged.push(FieldChange {
                field: "title",
                old_value: loggable_text(&task.title),
                new_value: loggable_text(title),
            });
        }
        model.title = Set(title.clone());
    }
    if let Some(description) = &changes.description {
        if *description != task.description {
            staged.push(FieldChange {
                field: "description",
                old_value: task.description.as_deref().and_then(loggable_text),
                new_value: description.as_deref().and_then(loggable_text),
            });
        }
        model.description = Set(description.clone());
    }
    if let Some(task_type) = &changes.task_type {
        if *task_type != task.task_type {
            staged.push(FieldChange {
                field: "task_type",
                old_value: loggable_text(&task.task_type),
                new_value: loggable_text(task_type),
            });
        }
        model.task_type = Set(task_type.clone());
    }
    if let Some(status) = &changes.status {
        if *status != task.status {
            staged.push(FieldChange {
                field: "status",
                old_value: loggable_text(&task.status.to_value()),
                new_value: loggable_text(&status.to_value()),
            });
        }
        model.status = Set(status.clone());
    }
    if let Some(priority) = &changes.priority {
        if *priority != task.priority {
            staged.push(FieldChange {
                field: "priority",
                old_value: loggable_text(&task.priority.to_value()),
                new_value: loggable_text(&priority.to_value()),
            });
        }
        model.priority = Set(priority.clone());
    }
    if let Some(story_points) = changes.story_points {
        if story_points != task.story_points {
            staged.push(FieldChange {
                field: "story_points",
                old_value: loggable_int(task.story_points),
                new_value: loggable_int(story_points),
            });
        }
        model.story_points = Set(story_points);
    }
    if let Some(assigned_to) = changes.assigned_to {
        if assigned_to != task.assigned_to {
            staged.push(FieldChange {
                field: "assigned_to",
                old_value: loggable_int(task.assigned_to),
                new_value: loggable_int(assigned_to),
            });
        }
        model.assigned_to = Set(assigned_to);
    }
    if let Some(sprint_id) = changes.sprint_id {
        if sprint_id != task.sprint_id {
            staged.push(FieldChange {
                field: "sprint_id",
                old_value: loggable_int(task.sprint_id),
                new_value: loggable_int(sprint_id),
            });
        }
        model.sprint_id = Set(sprint_id);
    }
    if let Some(due_date) = changes.due_date {
        if due_date != task.due_date {
            staged.push(FieldChange {
                field: "due_date",
                old_value: loggable_date(task.due_date),
                new_value: loggable_date(due_date),
            });
        }
        model.due_date = Set(due_date);
    }

    (model, staged)
}

/// Stages a board move. Each supplied field is logged unconditionally, even
/// when the value does not change.
fn stage_move(task: &Task, move_req: &MoveTask) -> (task::ActiveModel, Vec<FieldChange>) {
    let mut model: task::ActiveModel = task.clone().into();
    let mut staged = Vec::new();

    if let Some(status) = &move_req.status {
        staged.push(FieldChange {
            field: "status",
            old_value: loggable_text(&task.status.to_value()),
            new_value: loggable_text(&status.to_value()),
        });
        model.status = Set(status.clone());
    }
    if let Some(sprint_id) = move_req.sprint_id {
        staged.push(FieldChange {
            field: "sprint_id",
            old_value: loggable_int(task.sprint_id),
            new_value: loggable_int(Some(sprint_id)),
        });
        model.sprint_id = Set(Some(sprint_id));
    }

    (model, staged)
}

/// Stages an assignment. Always one entry; the new assignee is recorded even
/// when it equals the old one.
fn stage_assign(task: &Task, user_id: i32) -> (task::ActiveModel, FieldChange) {
    let mut model: task::ActiveModel = task.clone().into();
    model.assigned_to = Set(Some(user_id));

    let change = FieldChange {
        field: "assigned_to",
        old_value: loggable_int(task.assigned_to),
        new_value: Some(user_id.to_string()),
    };

    (model, change)
}

pub async fn create_task(db: &DatabaseConnection, input: CreateTask) -> Result<Task, DbErr> {
    let now = Utc::now().naive_utc();
    let task_model = task::ActiveModel {
        project_id: Set(input.project_id),
        sprint_id: Set(input.sprint_id),
        title: Set(input.title),
        description: Set(input.description),
        task_type: Set(input.task_type),
        status: Set(input.status),
        priority: Set(input.priority),
        story_points: Set(input.story_points),
        assigned_to: Set(input.assigned_to),
        created_by: Set(input.created_by),
        created_at: Set(now),
        updated_at: Set(now),
        due_date: Set(input.due_date),
        ..Default::default()
    };

    let txn = db.begin().await?;
    let task = task_model.insert(&txn).await?;
    ActivityLogsRepo::record(
        &txn,
        NewActivity {
            task_id: task.id,
            user_id: task.created_by,
            action: ActivityAction::Created,
            field_changed: None,
            old_value: None,
            new_value: None,
        },
    )
    .await?;
    txn.commit().await?;

    Ok(task)
}

pub async fn update_task(
    db: &DatabaseConnection,
    task_id: i32,
    changes: UpdateTask,
) -> Result<Task, DbErr> {
    let task = TasksRepo::new(db.clone()).get(task_id).await?;

    let (mut model, staged) = stage_changes(&task, &changes);
    if !model.is_changed() {
        return Ok(task);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    let txn = db.begin().await?;
    let updated = model.update(&txn).await?;
    for change in staged {
        ActivityLogsRepo::record(
            &txn,
            NewActivity {
                task_id: task.id,
                user_id: task.created_by,
                action: ActivityAction::Updated,
                field_changed: Some(change.field),
                old_value: change.old_value,
                new_value: change.new_value,
            },
        )
        .await?;
    }
    txn.commit().await?;

    Ok(updated)
}

pub async fn move_task(
    db: &DatabaseConnection,
    task_id: i32,
    move_req: MoveTask,
) -> Result<Task, DbErr> {
    let task = TasksRepo::new(db.clone()).get(task_id).await?;

    let (mut model, staged) = stage_move(&task, &move_req);
    if !model.is_changed() {
        return Ok(task);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    let txn = db.begin().await?;
    let moved = model.update(&txn).await?;
    for change in staged {
        ActivityLogsRepo::record(
            &txn,
            NewActivity {
                task_id: task.id,
                user_id: task.created_by,
                action: ActivityAction::Moved,
                field_changed: Some(change.field),
                old_value: change.old_value,
                new_value: change.new_value,
            },
        )
        .await?;
    }
    txn.commit().await?;

    Ok(moved)
}

pub async fn assign_task(
    db: &DatabaseConnection,
    task_id: i32,
    user_id: i32,
) -> Result<Task, DbErr> {
    let task = TasksRepo::new(db.clone()).get(task_id).await?;

    let (mut model, change) = stage_assign(&task, user_id);
    model.updated_at = Set(Utc::now().naive_utc());

    let txn = db.begin().await?;
    let assigned = model.update(&txn).await?;
    ActivityLogsRepo::record(
        &txn,
        NewActivity {
            task_id: task.id,
            user_id: task.created_by,
            action: ActivityAction::Assigned,
            field_changed: Some(change.field),
            old_value: change.old_value,
            new_value: change.new_value,
        },
    )
    .await?;
    txn.commit().await?;

    Ok(assigned)
}

pub async fn add_comment(
    db: &DatabaseConnection,
    task_id: i32,
    input: CreateComment,
) -> Result<Comment, DbErr> {
    let task = TasksRepo::new(db.clone()).get(task_id).await?;
    let now = Utc::now().naive_utc();

    let txn = db.begin().await?;
    let comment_model = comment::ActiveModel {
        task_id: Set(task.id),
        user_id: Set(input.user_id),
        content: Set(input.content),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let comment = comment_model.insert(&txn).await?;
    ActivityLogsRepo::record(
        &txn,
        NewActivity {
            task_id: task.id,
            // Comments are attributed to the commenter, unlike field changes
            // which are attributed to the task's creator.
            user_id: input.user_id,
            action: ActivityAction::Commented,
            field_changed: None,
            old_value: None,
            new_value: None,
        },
    )
    .await?;
    txn.commit().await?;

    Ok(comment)
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue;

    use super::*;

    fn sample_task() -> Task {
        let now = Utc::now().naive_utc();
        Task {
            id: 1,
            project_id: 1,
            sprint_id: Some(2),
            title: "Build Kanban board".to_string(),
            description: Some("Implement drag-and-drop task board".to_string()),
            task_type: "story".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            story_points: Some(5),
            assigned_to: Some(5),
            created_by: 1,
            created_at: now,
            updated_at: now,
            due_date: None,
        }
    }

    #[test]
    fn test_update_stages_only_changed_fields() {
        let task = sample_task();
        let changes = UpdateTask {
            title: Some("Build Kanban board".to_string()),
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };

        let (model, staged) = stage_changes(&task, &changes);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field, "status");
        assert_eq!(staged[0].old_value, Some("todo".to_string()));
        assert_eq!(staged[0].new_value, Some("in_progress".to_string()));
        // The unchanged title is still applied.
        assert!(matches!(model.title, ActiveValue::Set(_)));
        assert!(matches!(model.status, ActiveValue::Set(TaskStatus::InProgress)));
    }

    #[test]
    fn test_update_with_no_fields_stages_nothing() {
        let task = sample_task();
        let (model, staged) = stage_changes(&task, &UpdateTask::default());

        assert!(staged.is_empty());
        assert!(!model.is_changed());
    }

    #[test]
    fn test_empty_string_values_are_recorded_as_absent() {
        let task = sample_task();
        let changes = UpdateTask {
            description: Some(Some(String::new())),
            ..Default::default()
        };

        let (_, staged) = stage_changes(&task, &changes);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field, "description");
        assert_eq!(
            staged[0].old_value,
            Some("Implement drag-and-drop task board".to_string())
        );
        assert_eq!(staged[0].new_value, None);
    }

    #[test]
    fn test_zero_story_points_are_recorded_as_absent() {
        let mut task = sample_task();
        task.story_points = Some(0);
        let changes = UpdateTask {
            story_points: Some(Some(8)),
            ..Default::default()
        };

        let (_, staged) = stage_changes(&task, &changes);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].old_value, None);
        assert_eq!(staged[0].new_value, Some("8".to_string()));
    }

    #[test]
    fn test_explicit_null_clears_sprint_and_is_logged() {
        let task = sample_task();
        let changes = UpdateTask {
            sprint_id: Some(None),
            ..Default::default()
        };

        let (model, staged) = stage_changes(&task, &changes);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field, "sprint_id");
        assert_eq!(staged[0].old_value, Some("2".to_string()));
        assert_eq!(staged[0].new_value, None);
        assert!(matches!(model.sprint_id, ActiveValue::Set(None)));
    }

    #[test]
    fn test_due_date_change_is_staged() {
        let task = sample_task();
        let due = chrono::NaiveDate::from_ymd_opt(2026, 8, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let changes = UpdateTask {
            due_date: Some(Some(due)),
            ..Default::default()
        };

        let (_, staged) = stage_changes(&task, &changes);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field, "due_date");
        assert_eq!(staged[0].old_value, None);
        assert_eq!(staged[0].new_value, Some(due.to_string()));
    }

    #[test]
    fn test_move_logs_even_when_status_is_unchanged() {
        let task = sample_task();
        let move_req = MoveTask {
            status: Some(TaskStatus::Todo),
            sprint_id: None,
        };

        let (_, staged) = stage_move(&task, &move_req);

        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field, "status");
        assert_eq!(staged[0].old_value, Some("todo".to_string()));
        assert_eq!(staged[0].new_value, Some("todo".to_string()));
    }

    #[test]
    fn test_move_with_both_fields_stages_two_entries() {
        let task = sample_task();
        let move_req = MoveTask {
            status: Some(TaskStatus::Done),
            sprint_id: Some(3),
        };

        let (model, staged) = stage_move(&task, &move_req);

        assert_eq!(staged.len(), 2);
        assert_eq!(staged[0].field, "status");
        assert_eq!(staged[1].field, "sprint_id");
        assert_eq!(staged[1].old_value, Some("2".to_string()));
        assert_eq!(staged[1].new_value, Some("3".to_string()));
        assert!(matches!(model.sprint_id, ActiveValue::Set(Some(3))));
    }

    #[test]
    fn test_move_with_no_fields_stages_nothing() {
        let task = sample_task();
        let move_req = MoveTask {
            status: None,
            sprint_id: None,
        };

        let (model, staged) = stage_move(&task, &move_req);

        assert!(staged.is_empty());
        assert!(!model.is_changed());
    }

    #[test]
    fn test_assign_stages_entry_even_when_assignee_is_unchanged() {
        let task = sample_task();
        let (_, change) = stage_assign(&task, 5);

        assert_eq!(change.field, "assigned_to");
        assert_eq!(change.old_value, Some("5".to_string()));
        assert_eq!(change.new_value, Some("5".to_string()));
    }

    #[test]
    fn test_assign_on_unassigned_task_has_no_old_value() {
        let mut task = sample_task();
        task.assigned_to = None;
        let (model, change) = stage_assign(&task, 3);

        assert_eq!(change.old_value, None);
        assert_eq!(change.new_value, Some("3".to_string()));
        assert!(matches!(model.assigned_to, ActiveValue::Set(Some(3))));
    }

    #[test]
    fn test_unknown_status_is_rejected_at_the_boundary() {
        let result = serde_json::from_str::<UpdateTask>(r#"{"status": "blocked"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_payload_distinguishes_null_from_omitted() {
        let changes: UpdateTask = serde_json::from_str(r#"{"sprint_id": null}"#).unwrap();
        assert_eq!(changes.sprint_id, Some(None));
        assert_eq!(changes.assigned_to, None);

        let changes: UpdateTask = serde_json::from_str(r#"{"sprint_id": 4}"#).unwrap();
        assert_eq!(changes.sprint_id, Some(Some(4)));
    }
}
