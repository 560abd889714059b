//! Task list and book catalog web service.
//!
//! Two independent CRUD features behind one actix-web server: a plain to-do
//! list under `/assignment` and a book catalog with cover-image uploads,
//! sortable listing and a chart data view under `/project`. Records live in
//! a SQLite file; cover images live in an upload directory and are
//! referenced by filename from the book rows.

pub mod config;
pub mod db;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
