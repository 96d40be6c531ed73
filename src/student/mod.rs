//! Student records
//!
//! Students are lightweight value records referenced by houses; a house
//! roster never owns the identity of a student, only a copy of the record.

pub mod student;

pub use student::Student;
