//! Teacher domain models.

use campus_db::queries::teachers::TeacherRow;
use serde::{Deserialize, Serialize};

/// Transfer shape of a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub age: i64,
}

impl TeacherDto {
    /// Create a DTO from a database row.
    pub fn from_row(row: TeacherRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            middle_name: row.middle_name,
            age: row.age,
        }
    }

    /// Convert back to the persisted shape.
    pub fn into_row(self) -> TeacherRow {
        TeacherRow {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
            age: self.age,
        }
    }
}

/// Fields for creating or updating a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_dto_round_trip() {
        let row = TeacherRow {
            id: 3,
            first_name: "Aidar".into(),
            last_name: "Ivanov".into(),
            middle_name: "K".into(),
            age: 40,
        };
        let dto = TeacherDto::from_row(row.clone());
        assert_eq!(dto.into_row(), row);
    }
}
