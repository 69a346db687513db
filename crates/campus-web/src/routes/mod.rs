//! Route handlers.

pub mod students;
pub mod subjects;
pub mod teachers;
