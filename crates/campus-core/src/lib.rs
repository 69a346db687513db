//! Campus Core Library
//!
//! Domain services and models for the university backend.

pub mod error;
pub mod student;
pub mod subject;
pub mod teacher;

pub use error::{CampusError, CampusResult};
