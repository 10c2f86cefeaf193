pub mod course;
pub mod screen;
pub mod student;

pub use course::{Course, NewCourse};
pub use screen::{ContainerWidth, ContentStyle, NewScreen, Screen, ScreenMetadata, ScreenPatch};
pub use student::{
    CourseGroups, CourseRef, NewStudent, RequirementGroups, RequirementTag, Standing, Student,
    StudentName,
};
