//! Student domain models.

use campus_db::queries::students::StudentRow;
use serde::{Deserialize, Serialize};

/// Transfer shape of a student. Association edges are deliberately not
/// part of it; they are served through their own endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub age: i64,
}

impl StudentDto {
    /// Create a DTO from a database row.
    pub fn from_row(row: StudentRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            middle_name: row.middle_name,
            age: row.age,
        }
    }

    /// Convert back to the persisted shape. Scalar fields round-trip
    /// without loss.
    pub fn into_row(self) -> StudentRow {
        StudentRow {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
            age: self.age,
        }
    }
}

/// Fields for creating or updating a student. The request layer has
/// already checked presence and the age bound by the time this exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
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
        let row = StudentRow {
            id: 7,
            first_name: "Ilyas".into(),
            last_name: "Nasirov".into(),
            middle_name: "U".into(),
            age: 25,
        };
        let dto = StudentDto::from_row(row.clone());
        assert_eq!(dto.into_row(), row);
    }
}
