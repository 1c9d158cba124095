pub mod auth;
pub mod course;
pub mod hashing;
pub mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};

pub use self::course::{
    CourseRepositoryTrait, CourseServiceTrait, DynCourseRepository, DynCourseService,
};

pub use self::user::{DynUserRepository, UserRepositoryTrait};
