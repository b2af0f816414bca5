//! Page Components
//!
//! Top-level page components for each route.

pub mod create_student;
pub mod edit_student;
pub mod student_list;

pub use create_student::CreateStudent;
pub use edit_student::EditStudent;
pub use student_list::StudentList;
