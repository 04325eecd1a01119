//! Student entity definitions

use serde::{Deserialize, Serialize};

use super::supervisor::Supervisor;

/// Student record with its supervisor relation populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub registration_no: String,
    pub mobile_number: String,
    pub supervisors: Vec<Supervisor>,
}

/// Request for creating a new student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub registration_no: String,
    pub mobile_number: String,
    #[serde(default)]
    pub supervisor_ids: Vec<i64>,
}

/// Request for updating an existing student.
///
/// Every field is wrapped in `Option` so a field absent from the payload
/// deserializes to `None` and keeps its stored value. `supervisor_ids`
/// present with an empty list clears the relation; absent leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let absent: UpdateStudentRequest = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(absent.name.as_deref(), Some("X"));
        assert!(absent.supervisor_ids.is_none());

        let empty: UpdateStudentRequest =
            serde_json::from_str(r#"{"supervisor_ids": []}"#).unwrap();
        assert_eq!(empty.supervisor_ids, Some(Vec::new()));
        assert!(empty.name.is_none());
    }
}
