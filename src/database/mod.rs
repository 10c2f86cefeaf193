pub mod courses;
pub mod manager;
pub mod models;
pub mod screens;
pub mod students;

pub use courses::CourseStore;
pub use manager::{DatabaseError, DatabaseManager};
pub use screens::ScreenStore;
pub use students::StudentStore;
