//! Subject domain models.

use campus_db::queries::subjects::SubjectRow;
use serde::{Deserialize, Serialize};

/// Transfer shape of a subject. The owning-teacher back-reference stays
/// out of the DTO; it is reachable via the teacher endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDto {
    pub id: i64,
    pub name: String,
}

impl SubjectDto {
    /// Create a DTO from a database row.
    pub fn from_row(row: SubjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Fields for creating or updating a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
}
