//! Entity structs for all SPR domain objects.
//!
//! Each entity maps to one table in the libSQL store. The structs are flat
//! (foreign keys as plain ids); the nested transport shape lives in
//! [`crate::records`].

mod internship;
mod offer;
mod report;
mod student;

pub use internship::Internship;
pub use offer::Offer;
pub use report::Report;
pub use student::Student;
