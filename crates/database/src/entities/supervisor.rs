//! Supervisor entity definitions

use serde::{Deserialize, Serialize};

/// Supervisor record. The inverse student relation is only visible through
/// the student side of the association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    pub id: i64,
    pub name: String,
    pub employee_id: String,
    pub mobile_number: String,
}

/// Request for creating a new supervisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupervisorRequest {
    pub name: String,
    pub employee_id: String,
    pub mobile_number: String,
}

/// Request for updating an existing supervisor. Absent fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupervisorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}
