//! student-api - A small CRUD HTTP service for student records
//!
//! Records live in a SQLite `student` table behind the [`store::StudentStore`]
//! trait; [`http_server`] maps the REST routes onto it.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod student;
