pub mod book;
pub mod task;
