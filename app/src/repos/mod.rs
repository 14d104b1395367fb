pub mod activity_logs;
pub mod comments;
pub mod projects;
pub mod sprints;
pub mod tasks;
pub mod users;
