//! Page components, one per route.

pub mod dashboard;
pub mod login;
pub mod projects;
pub mod register;
pub mod task_edit;
pub mod task_new;
pub mod tasks;
