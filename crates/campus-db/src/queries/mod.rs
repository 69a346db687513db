//! Query modules, one per table plus the association edge tables.

pub mod links;
pub mod students;
pub mod subjects;
pub mod teachers;
