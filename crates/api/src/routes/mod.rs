pub mod health;
pub mod students;
pub mod supervisors;

use serde::Serialize;

/// Acknowledgement body for successful deletes
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
