//! Repository implementations for database operations

pub mod student_repository;
pub mod supervisor_repository;

pub use student_repository::StudentRepository;
pub use supervisor_repository::SupervisorRepository;
