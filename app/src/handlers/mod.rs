pub mod projects;
pub mod sprints;
pub mod tasks;
pub mod users;
