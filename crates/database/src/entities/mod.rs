//! Entity definitions for the advisory records store

pub mod student;
pub mod supervisor;

pub use student::{CreateStudentRequest, Student, UpdateStudentRequest};
pub use supervisor::{CreateSupervisorRequest, Supervisor, UpdateSupervisorRequest};
