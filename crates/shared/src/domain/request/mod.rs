pub mod auth;
pub mod course;
pub mod user;

pub use self::user::CreateUserRequest;

pub use self::auth::{LoginRequest, RegisterRequest};

pub use self::course::{
    CourseAction, CourseActionError, CourseActionForm, CourseSort, CourseStatus,
    CreateCourseRequest, ListCoursesQuery, UpdateCourseRequest,
};
